pub mod gateways;
pub mod proximity;
pub mod repositories;
pub mod resolver;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use geoprofile_entities::{
        address::*, email::*, geo::*, identity::*, profile::*,
    };
}
