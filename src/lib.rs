// Serialization libraries.
#[macro_use] extern crate serde_derive;
extern crate serde_json;
extern crate serde;

// Logging libraries.
#[macro_use] extern crate log;

pub mod conditions;
pub mod gate;
pub mod id;
pub mod identity;
pub mod predicates;
pub mod request;
pub mod resolver;
pub mod roster;

pub use gate::{authorize, Decision};
pub use identity::{Identity, Role};
pub use request::{Action, Method, Policy, Request, Resource, Scope};
pub use resolver::Resolver;
pub use roster::Roster;
