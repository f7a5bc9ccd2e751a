//! Gateway for Retro-specific environment manipulations.
use crate::{RetroConfig, RetroEnv, RetroError, RetroRuntime, WrapperKind, WrapperRegistry};
use log::{info, trace};
use remote_env_core::{Env, EnvFamily, Options};

/// Validates, wraps and configures remote-controlled environments.
///
/// [`Retro::wrap`] must be called before [`Retro::configure`];
/// `configure` composes the runtime's blocking and unvectorizing adapters
/// around the environment and returns the [`RetroEnv`] facade. The facade
/// takes ownership of the environment handle.
pub struct Retro<R: RetroRuntime> {
    runtime: Option<(R, WrapperRegistry)>,
}

impl<R: RetroRuntime> Retro<R> {
    /// Builds the gateway.
    ///
    /// When the integration is disabled the runtime is dropped and every
    /// operation fails with [`RetroError::NotEnabled`].
    pub fn build(config: &RetroConfig, runtime: R) -> Self {
        let runtime = match config.enabled {
            true => {
                let wrappers = runtime.wrappers();
                info!(
                    "Retro enabled, wrappers: {:?}",
                    wrappers.kinds().collect::<Vec<_>>()
                );
                Some((runtime, wrappers))
            }
            false => None,
        };
        Self { runtime }
    }

    /// Wraps the environment with the named wrapper.
    ///
    /// This must be called before the environment is configured. Options
    /// are forwarded to the wrapper constructor; if the constructor
    /// rejects them the call fails with [`RetroError::InvalidOptions`]
    /// embedding the underlying message.
    pub fn wrap(
        &self,
        env: Box<dyn Env>,
        wrapper_name: &str,
        options: &Options,
    ) -> Result<Box<dyn Env>, RetroError> {
        trace!("Retro::wrap({})", wrapper_name);
        let (_, wrappers) = self.check_enabled()?;
        check_env(env.as_ref())?;
        let kind: WrapperKind = wrapper_name.parse()?;
        let build = wrappers
            .resolve(kind)
            .ok_or_else(|| RetroError::UnknownWrapper(wrapper_name.to_string()))?;
        build(env, options).map_err(|e| RetroError::InvalidOptions(e.to_string()))
    }

    /// Configures the environment and returns a facade around it.
    ///
    /// The options are forwarded to the environment's own configuration
    /// entry point. On success the environment is composed through the
    /// runtime's blocking adapter and then its unvectorizing adapter, and
    /// the result is wrapped in a [`RetroEnv`].
    pub fn configure(
        &self,
        mut env: Box<dyn Env>,
        options: &Options,
    ) -> Result<RetroEnv, RetroError> {
        trace!("Retro::configure()");
        let (runtime, _) = self.check_enabled()?;
        check_env(env.as_ref())?;
        env.configure(options)
            .map_err(|e| RetroError::InvalidOptions(e.to_string()))?;
        Ok(RetroEnv::new(runtime.unvectorize(runtime.blocking_reset(env))))
    }

    fn check_enabled(&self) -> Result<&(R, WrapperRegistry), RetroError> {
        self.runtime.as_ref().ok_or(RetroError::NotEnabled)
    }
}

fn check_env(env: &dyn Env) -> Result<(), RetroError> {
    match env.unwrapped().family() {
        EnvFamily::RemoteControl => Ok(()),
        _ => Err(RetroError::InvalidEnvironment),
    }
}
