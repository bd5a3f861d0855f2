use super::{Chemin, Part, SlashOptions};

/// Creates Chemins that share default slash options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheminFactory {
    options: SlashOptions,
}

impl CheminFactory {
    pub fn new(options: SlashOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> SlashOptions {
        self.options
    }

    pub fn create(&self, parts: Vec<Part>) -> Chemin {
        Chemin::with_options(parts, self.options)
    }
}
