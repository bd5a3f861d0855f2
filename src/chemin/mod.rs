mod composite;
mod factory;
mod matcher;
mod options;
mod part;
mod render;

pub use composite::{Chemin, chemins_equal};
pub use factory::CheminFactory;
pub use matcher::CheminMatch;
pub use options::SlashOptions;
pub use part::Part;
