pub(crate) mod player;
pub(crate) mod roles;
pub(crate) mod script;
