pub mod llrb;
pub mod llrb_traits;
mod node;
mod rotation;
mod tree_stats;
pub mod verify;

pub use self::tree_stats::TreeStats;

use self::llrb_traits::{KeyComparator, _Llrb};
use std::{fmt::Debug, marker::PhantomData};

#[derive(Clone, Debug)]
pub struct DefaultKeyComparator<T> {
    _t: PhantomData<T>,
}
impl<T> KeyComparator<T> for DefaultKeyComparator<T>
where
    T: Ord + Debug,
{
    fn new() -> Self {
        Self { _t: PhantomData }
    }
    fn less(&self, lhs: &T, rhs: &T) -> bool {
        lhs < rhs
    }
}

pub type DefaultLlrbConfig<K, V> = _Llrb<K, V, DefaultKeyComparator<K>, false>;
pub type VerifiedLlrbConfig<K, V> = _Llrb<K, V, DefaultKeyComparator<K>, true>;
