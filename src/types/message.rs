//! Message context attached to a single failure.
//!
//! [`MessageArgs`] is an ordered list of borrowed [`MessageValue`]s, usually
//! built with [`msg!`](crate::msg). It renders to text with these rules:
//!
//! | arguments | rendering |
//! |---|---|
//! | none | `""` |
//! | one text value | the text verbatim |
//! | one other value | the value's default rendering |
//! | text first, then more | first is a printf-style template for the rest |
//! | non-text first, then more | `[a b c]` |
//!
//! Templates understand `%s`, `%v`, `%+v`, `%d` (plain rendering), `%q`
//! (quoted) and `%%`.

use core::fmt::{self, Write};

use smallvec::SmallVec;

use crate::traits::MessageValue;

/// Ordered message context for one failure occurrence.
///
/// # Examples
///
/// ```
/// use may_rail::msg;
///
/// assert_eq!(msg!().render(), "");
/// assert_eq!(msg!("error occurred").render(), "error occurred");
/// assert_eq!(msg!(42).render(), "42");
/// assert_eq!(msg!("fail: %s", "foo").render(), "fail: foo");
/// assert_eq!(msg!(1, "two", 3.5).render(), "[1 two 3.5]");
/// ```
#[derive(Clone, Default)]
pub struct MessageArgs<'a> {
    args: SmallVec<[&'a (dyn MessageValue + 'a); 4]>,
}

impl<'a> MessageArgs<'a> {
    /// An empty message context.
    #[inline]
    pub fn new() -> Self {
        Self { args: SmallVec::new() }
    }

    /// Appends one argument.
    #[inline]
    #[must_use]
    pub fn arg<T>(mut self, value: &'a T) -> Self
    where
        T: MessageValue + 'a,
    {
        self.args.push(value);
        self
    }

    /// Appends one already type-erased argument.
    #[inline]
    #[must_use]
    pub fn arg_dyn(mut self, value: &'a (dyn MessageValue + 'a)) -> Self {
        self.args.push(value);
        self
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a (dyn MessageValue + 'a)> {
        self.args.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a (dyn MessageValue + 'a)> + '_ {
        self.args.iter().copied()
    }

    /// The leading text argument, if the first argument is text.
    pub fn template(&self) -> Option<&'a str> {
        self.args.first().copied().and_then(|first| first.as_text())
    }

    /// Renders the message following the module-level table.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) -> fmt::Result {
        match self.args.as_slice() {
            [] => Ok(()),
            [only] => match only.as_text() {
                Some(text) => out.write_str(text),
                None => write!(out, "{}", Rendered(*only)),
            },
            [first, rest @ ..] => match first.as_text() {
                Some(template) => format_template(out, template, rest),
                None => write_list(out, &self.args),
            },
        }
    }
}

impl fmt::Debug for MessageArgs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.args.iter().map(|arg| Rendered(*arg))).finish()
    }
}

impl fmt::Display for MessageArgs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Renders a message context, see [`MessageArgs::render`].
#[inline]
pub fn message_from_args(args: &MessageArgs<'_>) -> String {
    args.render()
}

/// Adapter that renders a value through [`MessageValue::render`].
struct Rendered<'a>(&'a (dyn MessageValue + 'a));

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}

impl fmt::Debug for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_text() {
            Some(text) => fmt::Debug::fmt(text, f),
            None => self.0.render(f),
        }
    }
}

pub(crate) fn write_list(
    out: &mut impl Write,
    values: &[&(dyn MessageValue + '_)],
) -> fmt::Result {
    out.write_char('[')?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.write_char(' ')?;
        }
        write!(out, "{}", Rendered(*value))?;
    }
    out.write_char(']')
}

fn format_template(
    out: &mut String,
    template: &str,
    args: &[&(dyn MessageValue + '_)],
) -> fmt::Result {
    let mut remaining = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.write_char(c)?;
            continue;
        }

        // Flags, width and precision are accepted and ignored.
        while let Some(&flag) = chars.peek() {
            if matches!(flag, '+' | '-' | '#' | ' ' | '0'..='9' | '.') {
                chars.next();
            } else {
                break;
            }
        }

        let Some(verb) = chars.next() else {
            out.write_str("%!(NOVERB)")?;
            break;
        };

        if verb == '%' {
            out.write_char('%')?;
            continue;
        }

        match remaining.next() {
            Some(value) if verb == 'q' => {
                let rendered = Rendered(*value).to_string();
                write!(out, "{rendered:?}")?;
            },
            Some(value) => write!(out, "{}", Rendered(*value))?,
            None => write!(out, "%!{verb}(MISSING)")?,
        }
    }

    let extra: Vec<_> = remaining.collect();
    if !extra.is_empty() {
        out.write_str("%!(EXTRA ")?;
        for (i, value) in extra.iter().enumerate() {
            if i > 0 {
                out.write_str(", ")?;
            }
            write!(out, "{}", Rendered(**value))?;
        }
        out.write_char(')')?;
    }

    Ok(())
}
