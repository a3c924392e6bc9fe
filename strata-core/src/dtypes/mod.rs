//! Module for data type related traits. Contains [Unit] and [Dtype].

/// Represents a unit type, but no arithmetic. Anything a tensor buffer can
/// hold and copy.
pub trait Unit:
    'static
    + Copy
    + Clone
    + Default
    + std::fmt::Debug
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + std::marker::Unpin
{
}

macro_rules! unit {
    ($($type:ty),*) => {
        $(impl Unit for $type {})*
    };
}

unit!(f32, f64, usize, isize, u8, i8, u16, i16, u32, i32, u64, i64, bool);

/// Represents a data type or element of an array that can have
/// arithmatic operations applied to it. The main difference
/// between [Dtype] and [Unit] is that [`bool`] is [Unit], but
/// not [Dtype].
///
/// Concatenation only moves values around, but layers report a scalar
/// loss contribution, which needs [num_traits::Zero], and tensors are filled
/// from index sequences with [num_traits::FromPrimitive].
pub trait Dtype:
    Unit
    + std::ops::Add<Self, Output = Self>
    + std::ops::Sub<Self, Output = Self>
    + std::ops::Mul<Self, Output = Self>
    + std::ops::Div<Self, Output = Self>
    + std::ops::AddAssign
    + num_traits::Zero
    + num_traits::FromPrimitive
{
}
impl Dtype for f32 {}
impl Dtype for f64 {}
impl Dtype for i8 {}
impl Dtype for i16 {}
impl Dtype for i32 {}
impl Dtype for i64 {}
impl Dtype for isize {}
impl Dtype for u8 {}
impl Dtype for u16 {}
impl Dtype for u32 {}
impl Dtype for u64 {}
impl Dtype for usize {}

