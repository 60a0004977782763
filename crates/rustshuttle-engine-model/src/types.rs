//! Closed enumerations accepted by the native transfer engine.
//!
//! Each enumeration exposes `as_str` / `Display` for its wire value and a
//! strict `FromStr`: unrecognized values are rejected with
//! [`UnknownEnumValueError`], never defaulted or dropped.

use crate::error::UnknownEnumValueError;

/// Define a closed engine enumeration with strict string parsing.
macro_rules! engine_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[doc = concat!("`", $value, "`.")]
                $variant,
            )+
        }

        impl $name {
            /// Returns the string value of this enum variant.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownEnumValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok(Self::$variant),)+
                    other => Err(UnknownEnumValueError::new(stringify!($name), other)),
                }
            }
        }
    };
}

engine_enum! {
    /// Canned access-control list applied to a stored object.
    ObjectCannedAcl {
        Private => "private",
        PublicRead => "public-read",
        PublicReadWrite => "public-read-write",
        AuthenticatedRead => "authenticated-read",
        AwsExecRead => "aws-exec-read",
        BucketOwnerRead => "bucket-owner-read",
        BucketOwnerFullControl => "bucket-owner-full-control",
    }
}

engine_enum! {
    /// Object lock mode applied to a stored object.
    ObjectLockMode {
        Governance => "GOVERNANCE",
        Compliance => "COMPLIANCE",
    }
}

engine_enum! {
    /// Legal hold status of a stored object.
    ObjectLockLegalHoldStatus {
        On => "ON",
        Off => "OFF",
    }
}

engine_enum! {
    /// Who pays the data transfer charges for a request.
    RequestPayer {
        Requester => "requester",
    }
}

engine_enum! {
    /// Indicator that the requester was charged for a request.
    RequestCharged {
        Requester => "requester",
    }
}

engine_enum! {
    /// Server-side encryption algorithm applied to a stored object.
    ServerSideEncryption {
        Aes256 => "AES256",
        AwsKms => "aws:kms",
        AwsKmsDsse => "aws:kms:dsse",
    }
}

engine_enum! {
    /// Storage class of a stored object.
    StorageClass {
        Standard => "STANDARD",
        ReducedRedundancy => "REDUCED_REDUNDANCY",
        StandardIa => "STANDARD_IA",
        OnezoneIa => "ONEZONE_IA",
        IntelligentTiering => "INTELLIGENT_TIERING",
        Glacier => "GLACIER",
        DeepArchive => "DEEP_ARCHIVE",
        GlacierIr => "GLACIER_IR",
        ExpressOnezone => "EXPRESS_ONEZONE",
        Outposts => "OUTPOSTS",
    }
}
