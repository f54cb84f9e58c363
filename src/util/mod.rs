pub mod anniversary;
#[cfg(feature = "hydrate")]
pub mod browser;
pub mod confirm;
