use quickcheck::{Arbitrary, Gen};

mod lists;
mod trees;

/// An enum for the various kinds of "things" to do to
/// a list in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Append the T to the list
    Insert(T),
    /// Delete the first T from the list
    Delete(T),
    /// Reverse the list
    Reverse,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Delete(T::arbitrary(g)),
            2 => Op::Reverse,
            _ => unreachable!(),
        }
    }
}
