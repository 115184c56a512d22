//! Declarative macros that generate the structure model.
//!
//! - `vk_enum!`: open enum newtype over `i32` with symbolic constants
//! - `vk_flags!`: bitmask newtype over `u32` with bit and alias names
//! - `vk_struct!`: a structure and its [`JsonField`](crate::codec::JsonField)
//!   impl. Members are written `"jsonKey" => field: Type`; an array member
//!   prefixed with `["countKey"]` gets its count member derived on encode and
//!   checked on decode.

macro_rules! vk_enum {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($vk:literal) {
            $( $konst:ident = $value:expr => $text:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
        pub struct $name(pub i32);

        impl $name {
            $( pub const $konst: $name = $name($value); )*

            pub const VK_NAME: &'static str = $vk;

            /// Symbolic name, if the value is known
            pub fn name(self) -> Option<&'static str> {
                $( if self.0 == $value { return Some($text); } )*
                None
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $text => Some(Self::$konst), )*
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self.name() {
                    Some(name) => f.write_str(name),
                    None => write!(f, "{}({})", $vk, self.0),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(self, f)
            }
        }

        impl $crate::codec::JsonField for $name {
            fn to_json(
                &self,
                enc: &mut $crate::codec::Encoder<'_>,
            ) -> $crate::error::Result<::serde_json::Value> {
                match self.name() {
                    Some(name) => Ok(::serde_json::Value::from(name)),
                    None => {
                        enc.warn(format!("Unknown {} value {}", $vk, self.0));
                        Ok(::serde_json::Value::from(self.0))
                    }
                }
            }

            fn from_json(
                value: &::serde_json::Value,
                dec: &mut $crate::codec::Decoder<'_>,
            ) -> $crate::error::Result<Self> {
                match value {
                    ::serde_json::Value::String(s) => Self::from_name(s)
                        .ok_or_else(|| dec.error(format!("Unknown {} value \"{}\"", $vk, s))),
                    ::serde_json::Value::Number(n) => {
                        let v = n
                            .as_i64()
                            .and_then(|v| i32::try_from(v).ok())
                            .map($name)
                            .ok_or_else(|| dec.error(format!("Invalid {} value", $vk)))?;
                        if v.name().is_none() {
                            dec.warn(format!("Unknown {} value {}", $vk, v.0));
                        }
                        Ok(v)
                    }
                    other => Err(dec.error(format!(
                        "Expected a {} name, found {}",
                        $vk,
                        $crate::codec::kind_of(other)
                    ))),
                }
            }
        }
    };
}

macro_rules! vk_flags {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($vk:literal) {
            $( $konst:ident = $value:expr => $text:literal ),* $(,)?
        }
        $( aliases { $( $akonst:ident = $avalue:expr => $atext:literal ),* $(,)? } )?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
        pub struct $name(pub u32);

        impl $name {
            $( pub const $konst: $name = $name($value); )*
            $( $( pub const $akonst: $name = $name($avalue); )* )?

            pub const VK_NAME: &'static str = $vk;

            /// Single-bit names
            const BITS: &'static [(u32, &'static str)] = &[ $( ($value, $text) ),* ];
            /// Multi-bit and zero-valued names
            const ALIASES: &'static [(u32, &'static str)] = &[ $( $( ($avalue, $atext) ),* )? ];

            pub const fn empty() -> Self {
                $name(0)
            }

            pub const fn bits(self) -> u32 {
                self.0
            }

            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            pub const fn intersects(self, other: Self) -> bool {
                self.0 & other.0 != 0
            }

            /// Render as `A | B` in ascending bit order.
            ///
            /// Returns `None` when the mask holds bits without a name.
            pub fn to_text(self) -> Option<String> {
                if let Some((_, alias)) = Self::ALIASES.iter().find(|(v, _)| *v == self.0 && *v != 0) {
                    return Some((*alias).to_string());
                }
                let mut names = Vec::new();
                for bit in 0..32 {
                    let mask = 1u32 << bit;
                    if self.0 & mask == 0 {
                        continue;
                    }
                    let (_, name) = Self::BITS.iter().find(|(v, _)| *v == mask)?;
                    names.push(*name);
                }
                Some(names.join(" | "))
            }

            /// Parse `A | B`, with arbitrary whitespace around names
            pub fn from_text(text: &str) -> ::std::result::Result<Self, String> {
                let mut bits = 0u32;
                for part in text.split('|') {
                    let part = part.trim();
                    let value = Self::BITS
                        .iter()
                        .chain(Self::ALIASES.iter())
                        .find(|(_, name)| *name == part)
                        .map(|(v, _)| *v)
                        .ok_or_else(|| part.to_string())?;
                    bits |= value;
                }
                Ok($name(bits))
            }
        }

        impl ::std::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                $name(self.0 | rhs.0)
            }
        }

        impl ::std::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl ::std::ops::BitAnd for $name {
            type Output = Self;

            fn bitand(self, rhs: Self) -> Self {
                $name(self.0 & rhs.0)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self.to_text() {
                    Some(text) if !text.is_empty() => write!(f, "{}({})", stringify!($name), text),
                    _ => write!(f, "{}(0x{:x})", stringify!($name), self.0),
                }
            }
        }

        impl $crate::codec::JsonField for $name {
            fn to_json(
                &self,
                enc: &mut $crate::codec::Encoder<'_>,
            ) -> $crate::error::Result<::serde_json::Value> {
                if self.0 == 0 {
                    return Ok(::serde_json::Value::from(0u32));
                }
                match self.to_text() {
                    Some(text) => Ok(::serde_json::Value::from(text)),
                    None => {
                        enc.warn(format!("Unknown {} bits in 0x{:x}", $vk, self.0));
                        Ok(::serde_json::Value::from(self.0))
                    }
                }
            }

            fn from_json(
                value: &::serde_json::Value,
                dec: &mut $crate::codec::Decoder<'_>,
            ) -> $crate::error::Result<Self> {
                match value {
                    ::serde_json::Value::Number(n) => n
                        .as_u64()
                        .and_then(|v| u32::try_from(v).ok())
                        .map($name)
                        .ok_or_else(|| dec.error(format!("Invalid {} value", $vk))),
                    ::serde_json::Value::String(s) => Self::from_text(s).map_err(|part| {
                        dec.error(format!("Unknown {} value \"{}\"", $vk, part))
                    }),
                    other => Err(dec.error(format!(
                        "Expected {} names or a number, found {}",
                        $vk,
                        $crate::codec::kind_of(other)
                    ))),
                }
            }
        }
    };
}

macro_rules! vk_struct {
    (@encode $this:ident, $enc:ident, $obj:ident;
        $( $([$count:literal])? $key:literal => $field:ident ),*
    ) => {
        $(
            $( $enc.count(&mut $obj, $count, $crate::codec::CountOf::count_of(&$this.$field))?; )?
            $enc.field(&mut $obj, $key, &$this.$field)?;
        )*
    };

    (@check $this:ident, $dec:ident, $obj:ident;
        $( $([$count:literal])? $key:literal => $field:ident ),*
    ) => {
        $( $( $dec.check_count($obj, $count, $crate::codec::CountOf::count_of(&$this.$field))?; )? )*
    };

    (@vk $name:ident, $vk:literal) => {
        impl $crate::model::VkStructure for $name {
            const VK_NAME: &'static str = $vk;
        }
    };

    // Tagged structure that carries an extension chain
    (
        $(#[$meta:meta])*
        pub struct $name:ident($vk:literal, $stype:ident) chain {
            $( $(#[$fmeta:meta])* $([$count:literal])? $key:literal => $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: $ty, )*
            /// Extension structures in chain order
            pub next: $crate::model::chain::Chain,
        }

        vk_struct!(@vk $name, $vk);

        impl $crate::model::Tagged for $name {
            const STRUCTURE_TYPE: $crate::model::StructureType = $crate::model::StructureType::$stype;
        }

        impl $crate::codec::JsonField for $name {
            fn to_json(
                &self,
                enc: &mut $crate::codec::Encoder<'_>,
            ) -> $crate::error::Result<::serde_json::Value> {
                let this = self;
                let mut obj = ::serde_json::Map::new();
                obj.insert(
                    "sType".to_string(),
                    enc.encode(&$crate::model::StructureType::$stype)?,
                );
                vk_struct!(@encode this, enc, obj; $( $([$count])? $key => $field ),*);
                let next = enc.scoped($crate::codec::Segment::Field("pNext"), |enc| {
                    this.next
                        .encode_chain($crate::model::StructureType::$stype, $vk, enc)
                })?;
                obj.insert("pNext".to_string(), next);
                Ok(::serde_json::Value::Object(obj))
            }

            fn from_json(
                value: &::serde_json::Value,
                dec: &mut $crate::codec::Decoder<'_>,
            ) -> $crate::error::Result<Self> {
                let obj = dec.object(value)?;
                $crate::model::chain::expect_structure_type(
                    obj,
                    $crate::model::StructureType::$stype,
                    dec,
                )?;
                let pnext = dec.member(obj, "pNext")?;
                let this = Self {
                    $( $field: dec.field(obj, $key)?, )*
                    next: dec.scoped($crate::codec::Segment::Field("pNext"), |dec| {
                        $crate::model::chain::Chain::decode_chain(
                            $crate::model::StructureType::$stype,
                            $vk,
                            pnext,
                            dec,
                        )
                    })?,
                };
                vk_struct!(@check this, dec, obj; $( $([$count])? $key => $field ),*);
                Ok(this)
            }
        }
    };

    // Tagged structure without a chain of its own
    (
        $(#[$meta:meta])*
        pub struct $name:ident($vk:literal, $stype:ident) {
            $( $(#[$fmeta:meta])* $([$count:literal])? $key:literal => $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        vk_struct!(@vk $name, $vk);

        impl $crate::model::Tagged for $name {
            const STRUCTURE_TYPE: $crate::model::StructureType = $crate::model::StructureType::$stype;
        }

        impl $crate::model::chain::Member for $name {
            fn encode_members(
                &self,
                enc: &mut $crate::codec::Encoder<'_>,
            ) -> $crate::error::Result<::serde_json::Map<String, ::serde_json::Value>> {
                let this = self;
                let mut obj = ::serde_json::Map::new();
                obj.insert(
                    "sType".to_string(),
                    enc.encode(&$crate::model::StructureType::$stype)?,
                );
                vk_struct!(@encode this, enc, obj; $( $([$count])? $key => $field ),*);
                Ok(obj)
            }

            fn decode_members(
                obj: &::serde_json::Map<String, ::serde_json::Value>,
                dec: &mut $crate::codec::Decoder<'_>,
            ) -> $crate::error::Result<Self> {
                $crate::model::chain::expect_structure_type(
                    obj,
                    $crate::model::StructureType::$stype,
                    dec,
                )?;
                let this = Self {
                    $( $field: dec.field(obj, $key)?, )*
                };
                vk_struct!(@check this, dec, obj; $( $([$count])? $key => $field ),*);
                Ok(this)
            }
        }

        impl $crate::codec::JsonField for $name {
            fn to_json(
                &self,
                enc: &mut $crate::codec::Encoder<'_>,
            ) -> $crate::error::Result<::serde_json::Value> {
                let mut obj = $crate::model::chain::Member::encode_members(self, enc)?;
                obj.insert(
                    "pNext".to_string(),
                    ::serde_json::Value::from($crate::codec::NULL_TOKEN),
                );
                Ok(::serde_json::Value::Object(obj))
            }

            fn from_json(
                value: &::serde_json::Value,
                dec: &mut $crate::codec::Decoder<'_>,
            ) -> $crate::error::Result<Self> {
                let obj = dec.object(value)?;
                if let Some(next) = obj.get("pNext") {
                    if next.as_str() != Some($crate::codec::NULL_TOKEN) {
                        dec.scoped($crate::codec::Segment::Field("pNext"), |dec| {
                            dec.warn(format!("Ignoring extension chain of {}", $vk));
                            Ok(())
                        })?;
                    }
                }
                $crate::model::chain::Member::decode_members(obj, dec)
            }
        }
    };

    // Plain structure
    (
        $(#[$meta:meta])*
        pub struct $name:ident($vk:literal) {
            $( $(#[$fmeta:meta])* $([$count:literal])? $key:literal => $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        vk_struct!(@vk $name, $vk);

        impl $crate::codec::JsonField for $name {
            fn to_json(
                &self,
                enc: &mut $crate::codec::Encoder<'_>,
            ) -> $crate::error::Result<::serde_json::Value> {
                let this = self;
                let mut obj = ::serde_json::Map::new();
                vk_struct!(@encode this, enc, obj; $( $([$count])? $key => $field ),*);
                Ok(::serde_json::Value::Object(obj))
            }

            fn from_json(
                value: &::serde_json::Value,
                dec: &mut $crate::codec::Decoder<'_>,
            ) -> $crate::error::Result<Self> {
                let obj = dec.object(value)?;
                let this = Self {
                    $( $field: dec.field(obj, $key)?, )*
                };
                vk_struct!(@check this, dec, obj; $( $([$count])? $key => $field ),*);
                Ok(this)
            }
        }
    };
}
