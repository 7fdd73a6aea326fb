// Tuple concatenation at the type level.
// The `|` operator uses these to keep member lists flat: `(a | b) | c` and `a | (b | c)` both yield `(a, b, c)`.

/// Append `X` to the end of a tuple.
#[doc(hidden)]
pub trait Append<X> {
    /// The tuple with `X` as its final element.
    type Output;

    /// Append `x`.
    fn append(self, x: X) -> Self::Output;
}

/// Concatenate the tuple `R` onto the end of a tuple.
#[doc(hidden)]
pub trait Concat<R> {
    /// The concatenated tuple.
    type Output;

    /// Concatenate `r`.
    fn concat(self, r: R) -> Self::Output;
}

macro_rules! append {
    ($($T:ident),*) => {
        impl<$($T,)* X> Append<X> for ($($T,)*) {
            type Output = ($($T,)* X,);

            #[allow(non_snake_case)]
            fn append(self, x: X) -> Self::Output {
                let ($($T,)*) = self;
                ($($T,)* x,)
            }
        }
    };
}

append!();
append!(A);
append!(A, B);
append!(A, B, C);
append!(A, B, C, D);
append!(A, B, C, D, E);
append!(A, B, C, D, E, F);
append!(A, B, C, D, E, F, G);
append!(A, B, C, D, E, F, G, H);
append!(A, B, C, D, E, F, G, H, I);
append!(A, B, C, D, E, F, G, H, I, J);
append!(A, B, C, D, E, F, G, H, I, J, K);

impl<L> Concat<()> for L {
    type Output = L;

    fn concat(self, _r: ()) -> Self::Output {
        self
    }
}

// Concatenation peels one element off the right hand side at a time.
macro_rules! concat {
    ($head:ident $(, $tail:ident)*) => {
        impl<L, $head, $($tail),*> Concat<($head, $($tail,)*)> for L
        where
            L: Append<$head>,
            <L as Append<$head>>::Output: Concat<($($tail,)*)>,
        {
            type Output = <<L as Append<$head>>::Output as Concat<($($tail,)*)>>::Output;

            #[allow(non_snake_case)]
            fn concat(self, r: ($head, $($tail,)*)) -> Self::Output {
                let ($head, $($tail,)*) = r;
                self.append($head).concat(($($tail,)*))
            }
        }
    };
}

concat!(A);
concat!(A, B);
concat!(A, B, C);
concat!(A, B, C, D);
concat!(A, B, C, D, E);
concat!(A, B, C, D, E, F);
concat!(A, B, C, D, E, F, G);
concat!(A, B, C, D, E, F, G, H);
concat!(A, B, C, D, E, F, G, H, I);
concat!(A, B, C, D, E, F, G, H, I, J);
concat!(A, B, C, D, E, F, G, H, I, J, K);
