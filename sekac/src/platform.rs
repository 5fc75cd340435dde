use sekcore::platform::ACPlatform;
use sekrbac::Enforcer;

/// Assembles a [`Platform`] from the persistence backend and the
/// permission enforcer.
///
/// Methods can be chained in order to set the configuration values.
/// The `Platform` is constructed by calling [`build`].
#[derive(Default)]
pub struct Builder {
    ac_platform: Option<Box<dyn ACPlatform>>,
    enforcer: Enforcer,
}

pub struct Platform {
    ac_platform: Box<dyn ACPlatform>,
    enforcer: Enforcer,
}

mod impls;
