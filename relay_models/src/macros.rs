macro_rules! id {
    ($(#[doc=$doc:literal])* $ident:ident) => {
        $(#[doc=$doc])*
        #[::nutype::nutype(derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Deref,
            From,
            Display,
            Serialize,
            Deserialize,
        ))]
        pub struct $ident(::uuid::Uuid);
    };
}

macro_rules! nutype_string {
    ($(#[doc=$doc:literal])* $ident:ident($($arg:meta),* $(,)?)) => {
        $(#[doc=$doc])*
        #[::nutype::nutype(
            $($arg,)*
            derive(Debug, Clone, PartialEq, Eq, Deref, TryFrom, Display, Serialize, Deserialize)
        )]
        pub struct $ident(String);
    };
}

pub(crate) use id;
pub(crate) use nutype_string;
