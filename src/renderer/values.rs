//! Render implementations for built-in types

use std::borrow::Cow;
use std::fmt::{self, Write};
use std::rc::Rc;
use std::sync::Arc;

use crate::parser::{Layout, Specifier};

use super::{Output, Render};

// Text is written verbatim whatever the specifier says

impl Render for str {
    fn render(&self, out: &mut Output<'_>, _spec: &Specifier) -> fmt::Result {
        out.write_str(self)
    }
}

impl Render for String {
    fn render(&self, out: &mut Output<'_>, _spec: &Specifier) -> fmt::Result {
        out.write_str(self)
    }
}

impl Render for Cow<'_, str> {
    fn render(&self, out: &mut Output<'_>, _spec: &Specifier) -> fmt::Result {
        out.write_str(self)
    }
}

impl Render for bool {
    fn render(&self, out: &mut Output<'_>, _spec: &Specifier) -> fmt::Result {
        out.write_str(if *self { "true" } else { "false" })
    }
}

impl Render for char {
    fn render(&self, out: &mut Output<'_>, spec: &Specifier) -> fmt::Result {
        match spec.layout {
            Some(Layout::Char) => out.write_padded(self.encode_utf8(&mut [0; 4]), spec),
            _ => u32::from(*self).render(out, spec),
        }
    }
}

macro_rules! render_integer {
    ($($ty:ty),* $(,)?) => {$(
        impl Render for $ty {
            fn render(&self, out: &mut Output<'_>, spec: &Specifier) -> fmt::Result {
                let value = *self;
                match spec.layout {
                    Some(Layout::Hex) if spec.uppercase => {
                        out.write_digits(&format!("{value:X}"), spec)
                    }
                    Some(Layout::Hex) => out.write_digits(&format!("{value:x}"), spec),
                    Some(Layout::Octal) => out.write_digits(&format!("{value:o}"), spec),
                    Some(Layout::Binary) => out.write_digits(&format!("{value:b}"), spec),
                    Some(Layout::Pointer) => out.write_address(&format!("{value:x}"), spec),
                    Some(Layout::Float) => render_float(value as f64, out, spec),
                    Some(Layout::Char) => {
                        match u32::try_from(value).ok().and_then(char::from_u32) {
                            Some(c) => out.write_padded(c.encode_utf8(&mut [0; 4]), spec),
                            None => out.write_padded(&value.to_string(), spec),
                        }
                    }
                    None => out.write_padded(&value.to_string(), spec),
                }
            }
        }
    )*};
}

render_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

fn render_float(value: f64, out: &mut Output<'_>, spec: &Specifier) -> fmt::Result {
    let precision = usize::from(out.options().float_precision);
    let text = format!("{value:.precision$}");
    out.write_padded(&text, spec)
}

impl Render for f64 {
    fn render(&self, out: &mut Output<'_>, spec: &Specifier) -> fmt::Result {
        render_float(*self, out, spec)
    }
}

impl Render for f32 {
    fn render(&self, out: &mut Output<'_>, spec: &Specifier) -> fmt::Result {
        render_float(f64::from(*self), out, spec)
    }
}

impl<T: ?Sized> Render for *const T {
    fn render(&self, out: &mut Output<'_>, spec: &Specifier) -> fmt::Result {
        let address = self.cast::<()>() as usize;
        out.write_address(&format!("{address:x}"), spec)
    }
}

impl<T: ?Sized> Render for *mut T {
    fn render(&self, out: &mut Output<'_>, spec: &Specifier) -> fmt::Result {
        self.cast_const().render(out, spec)
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, out: &mut Output<'_>, spec: &Specifier) -> fmt::Result {
        (**self).render(out, spec)
    }
}

impl<T: Render + ?Sized> Render for &mut T {
    fn render(&self, out: &mut Output<'_>, spec: &Specifier) -> fmt::Result {
        (**self).render(out, spec)
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self, out: &mut Output<'_>, spec: &Specifier) -> fmt::Result {
        (**self).render(out, spec)
    }
}

impl<T: Render + ?Sized> Render for Rc<T> {
    fn render(&self, out: &mut Output<'_>, spec: &Specifier) -> fmt::Result {
        (**self).render(out, spec)
    }
}

impl<T: Render + ?Sized> Render for Arc<T> {
    fn render(&self, out: &mut Output<'_>, spec: &Specifier) -> fmt::Result {
        (**self).render(out, spec)
    }
}
