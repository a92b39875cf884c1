pub mod extract;
pub mod reconcile;
pub mod show;
pub mod table;
pub mod util;

pub use extract::*;
pub use reconcile::*;
pub use show::*;
pub use table::*;
pub use util::*;
