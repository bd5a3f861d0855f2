use std::sync::Arc;

use super::Chemin;
use crate::param::{Param, constant};

/// One element of a Chemin: an atomic param or a nested Chemin.
#[derive(Debug, Clone)]
pub enum Part {
    Param(Arc<dyn Param>),
    Chemin(Chemin),
}

impl Part {
    pub fn as_chemin(&self) -> Option<&Chemin> {
        match self {
            Part::Chemin(chemin) => Some(chemin),
            Part::Param(_) => None,
        }
    }

    pub fn as_param(&self) -> Option<&Arc<dyn Param>> {
        match self {
            Part::Param(param) => Some(param),
            Part::Chemin(_) => None,
        }
    }
}

impl From<&str> for Part {
    fn from(value: &str) -> Self {
        Part::Param(Arc::new(constant(value)))
    }
}

impl From<String> for Part {
    fn from(value: String) -> Self {
        Part::Param(Arc::new(constant(value)))
    }
}

impl From<Chemin> for Part {
    fn from(value: Chemin) -> Self {
        Part::Chemin(value)
    }
}

impl From<&Chemin> for Part {
    fn from(value: &Chemin) -> Self {
        Part::Chemin(value.clone())
    }
}

impl From<Arc<dyn Param>> for Part {
    fn from(value: Arc<dyn Param>) -> Self {
        Part::Param(value)
    }
}

impl<P: Param> From<P> for Part {
    fn from(value: P) -> Self {
        Part::Param(Arc::new(value))
    }
}
