/// A payload that exposes an identifier. [`BinaryNode::get_child`][crate::BinaryNode::get_child]
/// and friends compare this identifier to find a specific child.
///
/// # Examples
///
/// ```
/// use binary_node::{BinaryNode, Identify};
///
/// #[derive(Debug)]
/// struct Token {
///     name: String,
///     weight: u32,
/// }
///
/// impl Identify for Token {
///     type Id = str;
///
///     fn id(&self) -> &str {
///         &self.name
///     }
/// }
///
/// let mut node = BinaryNode::new(Token { name: "+".into(), weight: 1 });
/// node.insert(BinaryNode::new(Token { name: "x".into(), weight: 2 }))
///     .unwrap();
///
/// assert_eq!(node.get_child("x").unwrap().value().weight, 2);
/// ```
pub trait Identify {
    /// The identifier type. Compared with `==` against lookup keys.
    type Id: ?Sized + PartialEq;

    /// The identifier of this payload.
    fn id(&self) -> &Self::Id;
}

impl Identify for String {
    type Id = String;

    fn id(&self) -> &String {
        self
    }
}

/// Plain values are their own identifiers.
macro_rules! identify_self {
    ($($t:ty),* $(,)?) => {
        $(
            impl Identify for $t {
                type Id = $t;

                fn id(&self) -> &$t {
                    self
                }
            }
        )*
    };
}

identify_self!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool);
