use serde::{Deserialize, Serialize};

/// Implements the sqlx plumbing for enums stored as TEXT, plus the
/// string conversions shared by serde-facing code and query parsing.
macro_rules! text_enum {
    ($name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }

            pub fn parse(s: &str) -> Option<Self> {
                match s {
                    $($text => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl<DB: sqlx::Database> sqlx::Type<DB> for $name
        where
            String: sqlx::Type<DB>,
        {
            fn type_info() -> <DB as sqlx::Database>::TypeInfo {
                <String as sqlx::Type<DB>>::type_info()
            }

            fn compatible(ty: &<DB as sqlx::Database>::TypeInfo) -> bool {
                <String as sqlx::Type<DB>>::compatible(ty)
            }
        }

        impl<'q, DB: sqlx::Database> sqlx::Encode<'q, DB> for $name
        where
            String: sqlx::Encode<'q, DB>,
        {
            fn encode_by_ref(
                &self,
                buf: &mut <DB as sqlx::Database>::ArgumentBuffer<'q>,
            ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
                <String as sqlx::Encode<'q, DB>>::encode(self.as_str().to_owned(), buf)
            }
        }

        impl<'r, DB: sqlx::Database> sqlx::Decode<'r, DB> for $name
        where
            String: sqlx::Decode<'r, DB>,
        {
            fn decode(
                value: <DB as sqlx::Database>::ValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                let s = <String as sqlx::Decode<'r, DB>>::decode(value)?;
                Self::parse(&s)
                    .ok_or_else(|| format!("invalid {} value: {s}", stringify!($name)).into())
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConcertStatus {
    #[default]
    Upcoming,
    Completed,
    Cancelled,
}

text_enum!(ConcertStatus {
    Upcoming => "upcoming",
    Completed => "completed",
    Cancelled => "cancelled",
});

/// Fulfillment pipeline for a hire request. The enum is deliberately flat:
/// an administrator may move a booking from any status to any other. The
/// forward progression pending -> processing -> booked -> shipped ->
/// completed is a staff convention, not a machine rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Processing,
    Booked,
    Shipped,
    Completed,
    Failed,
}

text_enum!(BookingStatus {
    Pending => "pending",
    Processing => "processing",
    Booked => "booked",
    Shipped => "shipped",
    Completed => "completed",
    Failed => "failed",
});

impl BookingStatus {
    /// Terminal by staff convention only; never enforced on writes.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryType {
    #[default]
    Pickup,
    Mail,
}

text_enum!(DeliveryType {
    Pickup => "pickup",
    Mail => "mail",
});
