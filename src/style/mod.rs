pub(crate) mod attrs;
pub(crate) mod cascade;
pub(crate) mod props;
pub(crate) mod pseudo;
pub(crate) mod setters;
pub(crate) mod table;
pub(crate) mod theme;
pub(crate) mod transform;
pub(crate) mod value;
