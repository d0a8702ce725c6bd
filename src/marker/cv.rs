use super::sealed::Sealed;

/// Type-level constness.
pub trait Constness: Sealed + Copy + Default + 'static {
    /// Whether this marker is `Const`.
    const IS_CONST: bool;
    /// Sticky union with `O`.
    type Or<O: Constness>: Constness;
}

/// Type-level volatility.
pub trait Volatility: Sealed + Copy + Default + 'static {
    /// Whether this marker is `Volatile`.
    const IS_VOLATILE: bool;
    /// Sticky union with `O`.
    type Or<O: Volatility>: Volatility;
}

/// Not const.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Mutable;

/// `const`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Const;

/// Not volatile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NonVolatile;

/// `volatile`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Volatile;

impl Sealed for Mutable {}
impl Sealed for Const {}
impl Sealed for NonVolatile {}
impl Sealed for Volatile {}

impl Constness for Mutable {
    const IS_CONST: bool = false;
    type Or<O: Constness> = O;
}

impl Constness for Const {
    const IS_CONST: bool = true;
    type Or<O: Constness> = Const;
}

impl Volatility for NonVolatile {
    const IS_VOLATILE: bool = false;
    type Or<O: Volatility> = O;
}

impl Volatility for Volatile {
    const IS_VOLATILE: bool = true;
    type Or<O: Volatility> = Volatile;
}

/// `Self` is the same qualifier as `Outer`, or absent.
///
/// Native forwarding may add a qualifier but never drop one.
#[diagnostic::on_unimplemented(
    message = "forwarding as `{Outer}` would drop `{Self}`",
    label = "the model type must carry every qualifier of the argument"
)]
pub trait Within<Outer>: Sealed {}

impl<O: Constness> Within<O> for Mutable {}
impl Within<Const> for Const {}
impl<O: Volatility> Within<O> for NonVolatile {}
impl Within<Volatile> for Volatile {}
