use binary_node::{BinaryNode, NodeError, Shape};

use crate::Op;

/// Applies a set of operations to a node, ignoring rejected insertions.
fn do_ops(ops: &[Op<u8>], node: &mut BinaryNode<u8>) {
    for op in ops {
        match *op {
            Op::Insert(v) => {
                let _ = node.insert(BinaryNode::new(v));
            }
            Op::InsertLeft(v) => {
                let _ = node.insert_left(BinaryNode::new(v));
            }
            Op::InsertRight(v) => {
                let _ = node.insert_right(BinaryNode::new(v));
            }
            Op::DeleteLeft => {
                node.delete_left();
            }
            Op::DeleteRight => {
                node.delete_right();
            }
        }
    }
}

fn build(ops: &[Op<u8>]) -> BinaryNode<u8> {
    let mut node = BinaryNode::new(0);
    do_ops(ops, &mut node);
    node
}

quickcheck::quickcheck! {
    fn exactly_one_shape(ops: Vec<Op<u8>>) -> bool {
        let node = build(&ops);
        let held = [
            node.is_leaf(),
            node.is_simple_left(),
            node.is_simple_right(),
            node.is_double(),
        ];

        held.iter().filter(|&&b| b).count() == 1 && node.is_node() != node.is_leaf()
    }
}

quickcheck::quickcheck! {
    fn insert_fills_first_free_slot(ops: Vec<Op<u8>>, v: u8) -> bool {
        let mut node = build(&ops);
        let before = node.clone();

        let inserted = node.insert(BinaryNode::new(v)).map(|_| ());
        match inserted {
            Ok(()) => match before.shape() {
                Shape::Leaf | Shape::SimpleRight => {
                    node.left().map(BinaryNode::value) == Some(&v)
                        && node.right() == before.right()
                }
                Shape::SimpleLeft => {
                    node.right().map(BinaryNode::value) == Some(&v) && node.left() == before.left()
                }
                Shape::Double => false,
            },
            Err(NodeError::ChildSlotsFull(child)) => {
                before.is_double() && node == before && child.into_value() == v
            }
            Err(_) => false,
        }
    }
}

quickcheck::quickcheck! {
    fn delete_is_idempotent(ops: Vec<Op<u8>>) -> bool {
        let mut once = build(&ops);
        once.delete_left();
        let mut twice = once.clone();
        twice.delete_left();

        once == twice && !once.is_simple_left() && !once.is_double()
    }
}

quickcheck::quickcheck! {
    fn child_exists_agrees_with_get_child(ops: Vec<Op<u8>>, probes: Vec<u8>) -> bool {
        let node = build(&ops);

        probes.iter().all(|id| {
            let found = node.get_child(id);
            let expected = node
                .left()
                .filter(|c| c.value() == id)
                .or_else(|| node.right().filter(|c| c.value() == id));

            node.child_exists(id) == found.is_ok() && found.ok() == expected
        })
    }
}
