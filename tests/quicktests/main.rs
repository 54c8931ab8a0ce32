use quickcheck::{Arbitrary, Gen};

mod node;

/// An enum for the various kinds of "things" to do to
/// a binary node in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<V> {
    /// Insert a child carrying V into the first free slot
    Insert(V),
    /// Insert a child carrying V into the left slot
    InsertLeft(V),
    /// Insert a child carrying V into the right slot
    InsertRight(V),
    /// Clear the left slot
    DeleteLeft,
    /// Clear the right slot
    DeleteRight,
}

impl<V> Arbitrary for Op<V>
where
    V: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2, 3, 4]).unwrap() {
            0 => Op::Insert(V::arbitrary(g)),
            1 => Op::InsertLeft(V::arbitrary(g)),
            2 => Op::InsertRight(V::arbitrary(g)),
            3 => Op::DeleteLeft,
            4 => Op::DeleteRight,
            _ => unreachable!(),
        }
    }
}
