//! chat-core
//!
//! Pure chat logic, no I/O:
//! - inbound message classification (command vs chat)
//! - display-identity generation
//! - the currency quote value

pub mod identity;
pub mod quote;
pub mod router;

pub use identity::{NameSource, SequentialNames, WordPairNames};
pub use quote::Quote;
pub use router::{classify, Dispatch, EXCHANGE_KEYWORD};
