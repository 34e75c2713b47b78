use crate::binding::{Binding, BindingKind, Callbacks, LocalBinding, QueryBinding, StackBinding};
use crate::config::ParamConfig;
use crate::environment::Environment;
use paramsync_types::ParamResult;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use tracing::error;

/// One activation of a named parameter.
///
/// Mounting picks the store, captures the initial value and starts the
/// has-set-state latch unset. Drop the `Param` when the consumer goes away;
/// a new mount starts from scratch.
pub struct Param<T> {
    name: String,
    binding: Arc<dyn Binding<T>>,
    callbacks: Arc<Callbacks<T>>,
}

impl<T> Param<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Binds `name` to the store `env` selects.
    ///
    /// On a native platform without an active stack entry this logs an error
    /// and falls back to local state seeded with the initial value.
    pub fn mount(name: impl Into<String>, config: ParamConfig<T>, env: &Environment) -> Self {
        let name = name.into();
        let callbacks = Arc::new(Callbacks::new(&config));

        let binding: Arc<dyn Binding<T>> = match env {
            Environment::Web { router } => Arc::new(QueryBinding::new(
                name.clone(),
                Arc::clone(router),
                Arc::clone(&callbacks),
                config.initial,
            )),
            Environment::Native { navigator } => {
                match navigator.as_ref().filter(|n| n.active_params().is_some()) {
                    Some(navigator) => Arc::new(StackBinding::new(name.clone(), Arc::clone(navigator))),
                    None => {
                        error!(
                            param = %name,
                            "no navigation stack entry available; falling back to local state"
                        );
                        Arc::new(LocalBinding::new(config.initial))
                    }
                }
            }
        };

        Self {
            name,
            binding,
            callbacks,
        }
    }
}

impl<T> Param<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The store this parameter was bound to at mount.
    pub fn kind(&self) -> BindingKind {
        self.binding.kind()
    }

    /// Current value.
    pub fn value(&self) -> ParamResult<Option<T>> {
        self.binding.read()
    }

    /// Writes a new value. `None` (or an empty string on the web) removes the
    /// parameter.
    pub fn set(&self, value: Option<T>) -> ParamResult<()> {
        self.binding.write(value)
    }

    /// A setter that stays the same across evaluations.
    pub fn setter(&self) -> Setter<T> {
        Setter {
            binding: Arc::clone(&self.binding),
        }
    }

    /// Current value plus the stable setter.
    pub fn state(&self) -> ParamResult<(Option<T>, Setter<T>)> {
        Ok((self.value()?, self.setter()))
    }

    /// Installs the caller's latest parse, stringify and clear list.
    ///
    /// Call once per evaluation. The initial value is not touched.
    pub fn refresh(&self, config: &ParamConfig<T>) {
        self.callbacks.refresh(config);
    }
}

impl<T> fmt::Debug for Param<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Param")
            .field("name", &self.name)
            .field("kind", &self.binding.kind())
            .finish()
    }
}

/// Writes through to the store its [`Param`] was bound to.
pub struct Setter<T> {
    binding: Arc<dyn Binding<T>>,
}

impl<T> Setter<T> {
    pub fn set(&self, value: Option<T>) -> ParamResult<()> {
        self.binding.write(value)
    }

    /// True if both setters write through the same binding.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.binding, &other.binding)
    }
}

impl<T> Clone for Setter<T> {
    fn clone(&self) -> Self {
        Self {
            binding: Arc::clone(&self.binding),
        }
    }
}

impl<T> fmt::Debug for Setter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Setter")
            .field("kind", &self.binding.kind())
            .finish()
    }
}
