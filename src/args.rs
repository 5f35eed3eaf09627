//! Binding of ordered argument lists to render handles
//!
//! Tuples bind heterogeneous arguments whose types are known at the call site.
//! Slices, arrays and vectors bind runtime-sized lists of one renderable type
//! (including `&dyn Render`).

use crate::renderer::Render;

/// Position-indexed render handles borrowed from one argument list
///
/// Handles borrow the arguments, so a `Bindings` cannot outlive the call
/// that created it.
pub struct Bindings<'a> {
    handles: Vec<&'a dyn Render>,
}

impl<'a> Bindings<'a> {
    pub fn new(handles: Vec<&'a dyn Render>) -> Self {
        Self { handles }
    }

    /// Handle for the argument declared at `position`
    pub fn get(&self, position: usize) -> Option<&'a dyn Render> {
        self.handles.get(position).copied()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// An ordered argument list
pub trait Arguments {
    /// Number of arguments
    fn arity(&self) -> usize;

    /// Bind every argument, in declaration order
    fn bind(&self) -> Bindings<'_>;
}

impl Arguments for () {
    fn arity(&self) -> usize {
        0
    }

    fn bind(&self) -> Bindings<'_> {
        Bindings::new(Vec::new())
    }
}

macro_rules! tuple_arguments {
    ($($name:ident),+) => {
        impl<$($name: Render),+> Arguments for ($($name,)+) {
            fn arity(&self) -> usize {
                [$(stringify!($name)),+].len()
            }

            #[allow(non_snake_case)]
            fn bind(&self) -> Bindings<'_> {
                let ($($name,)+) = self;
                Bindings::new(vec![$($name as &dyn Render),+])
            }
        }
    };
}

tuple_arguments!(A);
tuple_arguments!(A, B);
tuple_arguments!(A, B, C);
tuple_arguments!(A, B, C, D);
tuple_arguments!(A, B, C, D, E);
tuple_arguments!(A, B, C, D, E, F);
tuple_arguments!(A, B, C, D, E, F, G);
tuple_arguments!(A, B, C, D, E, F, G, H);
tuple_arguments!(A, B, C, D, E, F, G, H, I);
tuple_arguments!(A, B, C, D, E, F, G, H, I, J);
tuple_arguments!(A, B, C, D, E, F, G, H, I, J, K);
tuple_arguments!(A, B, C, D, E, F, G, H, I, J, K, L);

impl<T: Render> Arguments for [T] {
    fn arity(&self) -> usize {
        self.len()
    }

    fn bind(&self) -> Bindings<'_> {
        Bindings::new(self.iter().map(|value| value as &dyn Render).collect())
    }
}

impl<T: Render, const N: usize> Arguments for [T; N] {
    fn arity(&self) -> usize {
        N
    }

    fn bind(&self) -> Bindings<'_> {
        self.as_slice().bind()
    }
}

impl<T: Render> Arguments for Vec<T> {
    fn arity(&self) -> usize {
        self.len()
    }

    fn bind(&self) -> Bindings<'_> {
        self.as_slice().bind()
    }
}
