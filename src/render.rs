//! Brace notation for sets and nested sets, e.g. `{{1}, {2, 3}}`.
//!
//! Leaf values are written with `Display`; collections are written as their members,
//! comma separated, between braces, in the collection's own iteration order.

use std::collections::{BTreeSet, HashSet};
use std::fmt::Write;
use std::hash::BuildHasher;

/// Trait for values that can be written in brace notation
pub trait Render
{
    /// Append the rendering of `self` to `out`
    fn render_into(&self, out: &mut String);

    /// Render `self` to a new string
    fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}

macro_rules! impl_render_for_leaf {
    ($($T:ty),*) => {
        $(
            impl Render for $T
            {
                fn render_into(&self, out: &mut String) {
                    // writing into a String cannot fail
                    let _ = write!(out, "{}", self);
                }
            }
        )*
    }
}

impl_render_for_leaf!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool, str, String);

fn render_members<'a, R, I>(members: I, out: &mut String)
    where R: Render + ?Sized + 'a, I: IntoIterator<Item = &'a R>
{
    out.push('{');
    for (i, member) in members.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        member.render_into(out);
    }
    out.push('}');
}

impl<R: Render + ?Sized> Render for &R
{
    fn render_into(&self, out: &mut String) {
        (**self).render_into(out);
    }
}

impl<R: Render> Render for BTreeSet<R>
{
    fn render_into(&self, out: &mut String) {
        render_members(self, out);
    }
}

impl<R: Render, S: BuildHasher> Render for HashSet<R, S>
{
    fn render_into(&self, out: &mut String) {
        render_members(self, out);
    }
}

impl<R: Render> Render for [R]
{
    fn render_into(&self, out: &mut String) {
        render_members(self, out);
    }
}

impl<R: Render> Render for Vec<R>
{
    fn render_into(&self, out: &mut String) {
        render_members(self.as_slice(), out);
    }
}

/// Render a block, partition or family of partitions in brace notation
pub fn render<R>(value: &R) -> String
    where R: Render + ?Sized
{
    value.render()
}
