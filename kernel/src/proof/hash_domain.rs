//! Typed domain separators for canonical hashing.
//!
//! Every hash computation selects a domain via [`HashDomain`], so a board
//! fingerprint can never collide with a report digest over the same bytes.
//! The enum, `as_bytes()`, `ALL`, and `Display` come from one macro list.

/// Declares `HashDomain` and its byte table from one list.
macro_rules! hash_domains {
    ( $( $(#[$meta:meta])* $variant:ident => $bytes:expr ),+ $(,)? ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Each variant maps to a unique, null-terminated byte string that is
        /// fed to SHA-256 ahead of the payload.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $( $(#[$meta])* $variant, )+
        }

        impl HashDomain {
            /// The raw separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domains in declaration order.
            pub const ALL: &[HashDomain] = &[ $( Self::$variant, )+ ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => f.write_str(stringify!($variant)), )+
                }
            }
        }
    };
}

hash_domains! {
    /// Board tile sequence (duplicate detection in the explored set).
    BoardIdentity => b"NPUZZLE::BOARD_IDENTITY::V1\0",

    /// Timing-free search report (cross-process determinism checks).
    SearchReport => b"NPUZZLE::SEARCH_REPORT::V1\0",
}
