// 🧱 Model Patterns - record / enum / list / link-map generators
//
// Every XS2A type is one of four shapes. The macros below expand a compact
// declaration into the struct, its serde bindings, the declarative field
// metadata used by the validator, fluent `with_*` mutators and the
// diagnostic `Display` dump.

// ============================================================================
// ENUMERATIONS
// ============================================================================

/// Closed set of wire strings.
///
/// `from_value` returns `None` for unknown input. Record fields holding an
/// enum decode through that lookup, so an unknown value on the wire becomes
/// an absent field instead of a deserialization error.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every declared constant, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Every declared wire string, in declaration order.
            pub const VALUES: &'static [&'static str] = &[ $( $wire ),+ ];

            /// Wire string of this constant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }

            /// Reverse lookup. Unknown strings yield `None`.
            pub fn from_value(value: &str) -> Option<Self> {
                match value {
                    $( $wire => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                $name::from_value(&raw)
                    .ok_or_else(|| serde::de::Error::unknown_variant(&raw, $name::VALUES))
            }
        }

        impl crate::attributes::FieldType for $name {
            fn kind() -> crate::attributes::FieldKind {
                crate::attributes::FieldKind::Enum {
                    name: stringify!($name),
                    values: $name::VALUES,
                }
            }

            fn render(&self) -> String {
                self.as_str().to_string()
            }

            fn deserialize_field<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
            where
                D: serde::Deserializer<'de>,
                Self: serde::Deserialize<'de>,
            {
                use serde::Deserialize;

                let raw = Option::<String>::deserialize(deserializer)?;
                Ok(raw.and_then(|value| {
                    let parsed = $name::from_value(&value);
                    if parsed.is_none() {
                        tracing::debug!(
                            enum_name = stringify!($name),
                            value = %value,
                            "unknown enum value decoded as absent"
                        );
                    }
                    parsed
                }))
            }
        }
    };
}

// ============================================================================
// RECORDS
// ============================================================================

/// Plain record: every field is `Option<T>` so "absent" and "present but
/// empty" stay distinguishable; constraints are listed per field and only
/// enforced by the validation pass.
///
/// ```ignore
/// record! {
///     Amount {
///         currency: String = "currency" [required, pattern(&CURRENCY)],
///         amount: String = "amount" [required, pattern(&AMOUNT)],
///     }
/// }
/// ```
macro_rules! record {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty = $wire:literal [ $( $rule:ident $( ( $($arg:expr),* ) )? ),* ]
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(
                    rename = $wire,
                    default,
                    skip_serializing_if = "Option::is_none",
                    deserialize_with = "crate::attributes::deserialize_field"
                )]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            /// Empty record, every field absent.
            pub fn new() -> Self {
                Self::default()
            }

            paste::paste! {
                $(
                    #[doc = concat!("Sets `", $wire, "` and returns the record.")]
                    pub fn [<with_ $field>](mut self, value: impl Into<$ty>) -> Self {
                        self.$field = Some(value.into());
                        self
                    }
                )*
            }
        }

        impl crate::attributes::Schema for $name {
            const NAME: &'static str = stringify!($name);

            fn fields() -> Vec<crate::attributes::FieldSpec> {
                vec![
                    $(
                        crate::attributes::FieldSpec::new(
                            stringify!($field),
                            $wire,
                            <$ty as crate::attributes::FieldType>::kind(),
                        )
                        $( .$rule( $( $($arg),* )? ) )*
                    ),*
                ]
            }
        }

        impl crate::attributes::FieldType for $name {
            fn kind() -> crate::attributes::FieldKind {
                crate::attributes::FieldKind::Record {
                    name: stringify!($name),
                    fields: <$name as crate::attributes::Schema>::fields,
                }
            }

            fn render(&self) -> String {
                self.to_string()
            }
        }

        impl std::fmt::Display for $name {
            #[allow(unused_variables)]
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                writeln!(f, "{} {{", stringify!($name))?;
                $(
                    writeln!(
                        f,
                        "    {}: {}",
                        stringify!($field),
                        crate::attributes::render_field(&self.$field)
                    )?;
                )*
                write!(f, "}}")
            }
        }
    };
}

// ============================================================================
// COLLECTIONS
// ============================================================================

/// Named ordered sequence, serialized as a bare JSON array.
macro_rules! list {
    (
        $(#[$meta:meta])*
        $name:ident($item:ty) [ $( $rule:ident $( ( $($arg:expr),* ) )? ),* ]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(Vec<$item>);

        impl $name {
            pub fn new() -> Self {
                Self(Vec::new())
            }

            /// Appends an item and returns the list.
            pub fn with_item(mut self, item: impl Into<$item>) -> Self {
                self.0.push(item.into());
                self
            }

            pub fn into_inner(self) -> Vec<$item> {
                self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = Vec<$item>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl From<Vec<$item>> for $name {
            fn from(items: Vec<$item>) -> Self {
                Self(items)
            }
        }

        impl FromIterator<$item> for $name {
            fn from_iter<I: IntoIterator<Item = $item>>(iter: I) -> Self {
                Self(iter.into_iter().collect())
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<$item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl crate::attributes::FieldType for $name {
            fn kind() -> crate::attributes::FieldKind {
                crate::attributes::FieldKind::List {
                    item: Box::new(<$item as crate::attributes::FieldType>::kind()),
                    item_rules: crate::attributes::Rules::new()
                        $( .$rule( $( $($arg),* )? ) )*
                        .into_vec(),
                }
            }

            fn render(&self) -> String {
                crate::attributes::render_items(&self.0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&crate::attributes::render_items(&self.0))
            }
        }
    };
}

// ============================================================================
// LINK MAPS
// ============================================================================

/// Open relation-name map with a few well-known keys promoted to typed
/// accessors. Accessors read and write the same storage as the map itself.
macro_rules! link_map {
    (
        $(#[$meta:meta])*
        $name:ident<$value:ty> {
            $( $accessor:ident => $key:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(crate::model::links::LinkMap<$value>);

        impl $name {
            /// Relation names exposed through typed accessors.
            pub const WELL_KNOWN: &'static [&'static str] = &[ $( $key ),* ];

            pub fn new() -> Self {
                Self::default()
            }

            pub fn into_inner(self) -> crate::model::links::LinkMap<$value> {
                self.0
            }

            paste::paste! {
                $(
                    #[doc = concat!("Entry under `", $key, "`.")]
                    pub fn $accessor(&self) -> Option<&$value> {
                        self.0.get($key)
                    }

                    #[doc = concat!("Inserts under `", $key, "`, returning the replaced entry.")]
                    pub fn [<set_ $accessor>](&mut self, value: impl Into<$value>) -> Option<$value> {
                        self.0.insert($key, value.into())
                    }

                    #[doc = concat!("Inserts under `", $key, "` and returns the map.")]
                    pub fn [<with_ $accessor>](mut self, value: impl Into<$value>) -> Self {
                        self.0.insert($key, value.into());
                        self
                    }
                )*
            }
        }

        impl std::ops::Deref for $name {
            type Target = crate::model::links::LinkMap<$value>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl From<crate::model::links::LinkMap<$value>> for $name {
            fn from(map: crate::model::links::LinkMap<$value>) -> Self {
                Self(map)
            }
        }

        impl crate::attributes::FieldType for $name {
            fn kind() -> crate::attributes::FieldKind {
                crate::attributes::FieldKind::Links {
                    name: stringify!($name),
                    value: Box::new(<$value as crate::attributes::FieldType>::kind()),
                }
            }

            fn render(&self) -> String {
                self.to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0.render_named(stringify!($name)))
            }
        }
    };
}
