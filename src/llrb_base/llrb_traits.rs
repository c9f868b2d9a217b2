use std::fmt::Debug;
use std::marker::PhantomData;

// Traits bound
pub trait KeyComparator<T> {
    fn new() -> Self;
    fn less(&self, lhs: &T, rhs: &T) -> bool;
}

pub trait LlrbParams {
    type KeyType: Debug;
    type ValueType;
    type KeyCompareType: KeyComparator<Self::KeyType>;
    /// Run a full structural verification after every mutation and panic
    /// on the first violation found.
    const SELF_VERIFY: bool;
}

pub struct _Llrb<TKey, TValue, TCompare, const SELF_VERIFY: bool> {
    _phantom_key: PhantomData<TKey>,
    _phantom_value: PhantomData<TValue>,
    _phantom_compare: PhantomData<TCompare>,
}

impl<TKey: Debug, TValue, TCompare: KeyComparator<TKey>, const VERIFY: bool> LlrbParams
    for _Llrb<TKey, TValue, TCompare, VERIFY>
{
    type KeyType = TKey;
    type ValueType = TValue;
    type KeyCompareType = TCompare;
    const SELF_VERIFY: bool = VERIFY;
}
