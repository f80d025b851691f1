//! Zero-cost combinator types for app composition.
//!
//! This module contains the concrete types returned by constructors and
//! combinators. Most users won't need to name these types directly; use the
//! methods on `AppExt` and the constructor functions, which return them
//! behind `impl App<...>`.

mod access;
mod bind;
mod callback;
mod catch_all;
mod chain;
mod fail;
mod for_each;
mod from_async;
mod from_result;
mod map;
mod map_err;
mod succeed;
mod suspend;
mod tap;
mod zip_with;

pub use access::{Access, AccessM};
pub use bind::Bind;
pub use callback::{Callback, Resolver};
pub use catch_all::CatchAll;
pub use chain::Chain;
pub use fail::Fail;
pub use for_each::{ForEach, Sequence, SequencePar};
pub use from_async::{FromAsync, TryAsync};
pub use from_result::FromResult;
pub use map::Map;
pub use map_err::{ErrInto, MapErr};
pub use succeed::Succeed;
pub use suspend::{Suspend, TrySuspend};
pub use tap::Tap;
pub use zip_with::ZipWith;
