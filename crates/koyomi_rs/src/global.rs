//! Process-wide calendar instance.

use std::sync::OnceLock;

use koyomi_search::EngineConfig;

use crate::error::KoyomiError;
use crate::koyomi::Koyomi;

static KOYOMI: OnceLock<Koyomi> = OnceLock::new();

/// Initialize the global calendar. Fails if already initialized.
pub fn init(config: EngineConfig) -> Result<(), KoyomiError> {
    let koyomi = Koyomi::new(config)?;
    KOYOMI
        .set(koyomi)
        .map_err(|_| KoyomiError::AlreadyInitialized)?;
    log::debug!("global calendar initialized");
    Ok(())
}

/// Whether [`init`] has succeeded.
pub fn is_initialized() -> bool {
    KOYOMI.get().is_some()
}

pub(crate) fn koyomi() -> Result<&'static Koyomi, KoyomiError> {
    KOYOMI.get().ok_or(KoyomiError::NotInitialized)
}
