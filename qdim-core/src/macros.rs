//! Macros for relating the units of one dimension.

/// Declares how the listed units combine under `+`, `-` and `%`, and converts between them.
///
/// Units must be listed from the finest to the coarsest ratio. The macro implements [`Combine`](crate::Combine):
///
/// - each unit with itself, yielding the unit itself;
/// - every pair of listed units, in both operand orders, yielding the finer unit;
/// - each unit with every structural unit ([`Prod`](crate::Prod), [`Per`](crate::Per), [`Pow`](crate::Pow),
///   [`Scaled`](crate::Scaled), [`Coherent`](crate::Coherent), [`Finer`](crate::Finer)), yielding
///   [`Finer`](crate::Finer).
///
/// It also implements `From` between every pair of listed units. Comparison and compound assignment need no
/// declaration: they are defined for any two units of equivalent dimensions.
///
/// Integral counts only combine when the coarser unit is a whole multiple of the finer one; anything else fails to
/// compile when instantiated.
///
/// ```rust
/// use qdim_core::length::{Kilometres, Metres};
///
/// let total = Kilometres::<i32>::new(1) + Metres::<i32>::new(250);
/// assert_eq!(total.count(), 1250);
/// assert!(Kilometres::<i32>::new(1) == Metres::<i32>::new(1000));
///
/// let m: Metres = Kilometres::<f64>::new(0.5).into();
/// assert_eq!(m.count(), 500.0);
/// ```
#[macro_export]
macro_rules! impl_unit_relations {
    (@unit $unit:ty) => {
        impl $crate::Combine<$unit> for $unit {
            type Output = $unit;
        }

        $crate::impl_unit_relations!(@structural $unit, [A: $crate::Unit, B: $crate::Unit] $crate::Prod<A, B>);
        $crate::impl_unit_relations!(@structural $unit, [A: $crate::Unit, B: $crate::Unit] $crate::Per<A, B>);
        $crate::impl_unit_relations!(@structural $unit, [A: $crate::Unit, const N: i8] $crate::Pow<A, N>);
        $crate::impl_unit_relations!(
            @structural $unit,
            [A: $crate::Unit, const NUM: i64, const DEN: i64, const EXP: i32] $crate::Scaled<A, NUM, DEN, EXP>
        );
        $crate::impl_unit_relations!(@structural $unit, [D: $crate::Dimension] $crate::Coherent<D>);
        $crate::impl_unit_relations!(@structural $unit, [A: $crate::Unit, B: $crate::Unit] $crate::Finer<A, B>);
    };

    (@structural $unit:ty, [$($generics:tt)*] $structural:ty) => {
        impl<$($generics)*> $crate::Combine<$structural> for $unit {
            type Output = $crate::Finer<$unit, $structural>;
        }

        impl<$($generics)*> $crate::Combine<$unit> for $structural {
            type Output = $crate::Finer<$structural, $unit>;
        }
    };

    (@pair $fine:ty, $coarse:ty) => {
        impl $crate::Combine<$coarse> for $fine {
            type Output = $fine;
        }

        impl $crate::Combine<$fine> for $coarse {
            type Output = $fine;
        }

        $crate::impl_unit_relations!(@from $fine, $coarse);
        $crate::impl_unit_relations!(@from $coarse, $fine);
    };

    (@from $to:ty, $from:ty) => {
        impl<R1: $crate::Representation, R2: $crate::Widen<R1>> From<$crate::Quantity<$from, R2>>
            for $crate::Quantity<$to, R1>
        {
            #[inline]
            fn from(value: $crate::Quantity<$from, R2>) -> Self {
                $crate::Quantity::new($crate::__private::assign_count::<$to, $from, R1, R2>(value))
            }
        }
    };

    // Relate the finest unit to all coarser ones, then recurse
    (@pairs $unit:ty) => {};
    (@pairs $first:ty, $($rest:ty),+) => {
        $( $crate::impl_unit_relations!(@pair $first, $rest); )+
        $crate::impl_unit_relations!(@pairs $($rest),+);
    };

    ($($unit:ty),+ $(,)?) => {
        $( $crate::impl_unit_relations!(@unit $unit); )+
        $crate::impl_unit_relations!(@pairs $($unit),+);
    };
}
