pub(crate) mod blit;
pub(crate) mod composite;
