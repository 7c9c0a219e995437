/*!

# Property Synthesis

A *property* is a named, typed value that an object exposes to a declarative binding layer
together with a fixed set of entry points: something to read it, usually something to be told when
it changes, and sometimes something to write or reset it. Written by hand, each property costs a
field, a getter, a setter that compares before it assigns, a signal, and a reset, all of which have
to agree with each other and with the naming rules of the host framework. That is exactly the kind
of code that should be generated.

[`reactive_object!`](crate::reactive_object!) takes a struct declaration whose fields are property
descriptors and produces all of it.

## Kinds of property

| Kind        | Read   | Write                                 | Notify         | Reset   |
| ----------- | ------ | ------------------------------------- | -------------- | ------- |
| `writable`  | public | public setter                         | on change only | public  |
| `read_only` | public | private update, same contract         | on change only | private |
| `constant`  | public | none, fixed at construction           | never          | none    |
| `list`      | public | private `&mut` access to the items    | never          | none    |

`read_only` and `constant` are not the same thing. A `read_only` property changes over the life of
its object (progress, status, connection state) and observers are told about it; only code in the
module that declares the object may change it. A `constant` property has no mutation path at all
and no signal.

A `list` property is a sequence of items backed by a [`PropertyList`]. Readers get a slice; the
list itself is never replaced, so it has no setter, no reset and no signal. The owning module
appends and clears through a private accessor.

## The write contract

Every write path of a notifying property (setter, internal update, reset) is
[`PropertyCell::replace`]: the new value is compared with `PartialEq` against the stored one; if
they are equal nothing happens and `false` is returned; otherwise the value is stored, the signal
is emitted exactly once with the stored value, and `true` is returned.

## Reading

Getters return `<T as CheapestRead>::Read<'_>`: a copy for small scalars, a shared reference for
everything else. See [`cheapest`]. A property declared with the `(by_ref)` mode, for example
`writable(by_ref) span: Range<u32>`, bypasses the trait and always returns `&T`, which is how types
from other crates without a [`CheapestRead`] impl are used.

## Building blocks

The macro is a convenience. [`PropertyCell`], [`Constant`], [`PropertyList`] and
[`Signal`](crate::Signal) can be
used directly in hand-written types, and [`ReactiveObject`] can be implemented by hand to
advertise their properties.

*/

pub mod cell;
pub mod cheapest;
pub mod descriptor;
pub mod list;
mod object;

pub use cell::{Constant, PropertyCell};
pub use cheapest::CheapestRead;
pub use descriptor::{Mutability, PropertyDescriptor, ReactiveObject};
pub use list::PropertyList;
