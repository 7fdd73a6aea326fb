/// The result of a [`WithShared`](./struct.WithShared.html) parser.
///
/// The `shared` options are parsed from the full token list, independently of the selected `command`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shared<S, C> {
    /// The result of the shared options parser.
    pub shared: S,
    /// The result of the selected command.
    pub command: C,
}

macro_rules! same {
    ($_case:ident, $output:ident) => {
        $output
    };
}

macro_rules! choice {
    ($name:ident, $arity:literal; $($index:literal => $T:ident),+) => {
        #[doc = concat!("The result of a [`Selector`](./struct.Selector.html) of ", $arity, " command(s).")]
        ///
        /// There is one variant per command, in the order the commands are combined.
        /// The variant identifies which command was selected, even when several commands have the same output type.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum $name<$($T),+> {
            $(
                #[doc = concat!("The result of command ", $index, ".")]
                $T($T),
            )+
        }

        impl<$($T),+> $name<$($T),+> {
            /// The position of the selected command, in the order the commands are combined.
            pub fn index(&self) -> usize {
                match self {
                    $($name::$T(_) => $index,)+
                }
            }
        }

        impl<O> $name<$(same!($T, O)),+> {
            /// The result of the selected command, when every command has the same output type.
            pub fn into_inner(self) -> O {
                match self {
                    $($name::$T(output) => output,)+
                }
            }
        }
    };
}

choice!(Choice1, 1; 0 => A);
choice!(Choice2, 2; 0 => A, 1 => B);
choice!(Choice3, 3; 0 => A, 1 => B, 2 => C);
choice!(Choice4, 4; 0 => A, 1 => B, 2 => C, 3 => D);
choice!(Choice5, 5; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E);
choice!(Choice6, 6; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F);
choice!(Choice7, 7; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G);
choice!(Choice8, 8; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H);
choice!(Choice9, 9; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I);
choice!(Choice10, 10; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I, 9 => J);
choice!(Choice11, 11; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I, 9 => J, 10 => K);
choice!(Choice12, 12; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I, 9 => J, 10 => K, 11 => L);
