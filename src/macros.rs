// Copyright 2026 The cloudstack-rs Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Macros generating the per-command boilerplate.

/// Getter, setter, builder and reset methods for one parameter.
macro_rules! param_accessors {
    (
        $(#[$fattr:meta])*
        $field:ident, $set:ident, $with:ident, $reset:ident: $type:ty = $key:literal
    ) => {
        $(#[$fattr])*
        #[inline]
        pub fn $field(&self) -> Option<$type> {
            self.bag.get($key)
        }

        $(#[$fattr])*
        pub fn $set<T: Into<$type>>(&mut self, value: T) {
            self.bag.set($key, value.into());
        }

        $(#[$fattr])*
        #[inline]
        pub fn $with<T: Into<$type>>(mut self, value: T) -> Self {
            self.$set(value);
            self
        }

        #[doc = concat!("Remove the `", $key, "` parameter.")]
        pub fn $reset(&mut self) {
            self.bag.reset($key);
        }
    };
}

/// Define a parameter structure backed by a `ParameterBag`.
///
/// Every field produces a getter, a setter, a builder-style `with_` method
/// and a `reset_` method. The type decides how the value is encoded.
macro_rules! command_params {
    (
        $(#[$attr:meta])*
        $name:ident {
            $(
                $(#[$fattr:meta])*
                $field:ident, $set:ident, $with:ident, $reset:ident: $type:ty = $key:literal
            ),* $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            bag: $crate::params::ParameterBag,
        }

        #[allow(dead_code)]
        impl $name {
            /// Raw parameters of the command.
            #[inline]
            pub fn as_bag(&self) -> &$crate::params::ParameterBag {
                &self.bag
            }

            /// Mutable raw parameters, for values without a typed accessor.
            #[inline]
            pub fn as_bag_mut(&mut self) -> &mut $crate::params::ParameterBag {
                &mut self.bag
            }

            $(
                param_accessors!(
                    $(#[$fattr])*
                    $field, $set, $with, $reset: $type = $key
                );
            )*
        }
    };
}

/// Implement `Command` for a parameter structure.
///
/// Optional settings: `method = RequestMethod::Post`, `asynchronous = true`
/// and `nested = "<key>"` for responses that wrap the entity one level
/// deeper.
macro_rules! api_command {
    (@item method = $val:expr) => {
        const METHOD: $crate::transport::RequestMethod = $val;
    };
    (@item asynchronous = $val:expr) => {
        const ASYNC: bool = $val;
    };
    (@item nested = $val:expr) => {
        const NESTED: Option<&'static str> = Some($val);
    };
    ($params:ident => $response:ty, $command:literal $(, $opt:ident = $val:expr)* $(,)?) => {
        impl $crate::command::Command for $params {
            type Response = $response;
            const NAME: &'static str = $command;
            $( api_command!(@item $opt = $val); )*

            #[inline]
            fn params(&self) -> &$crate::params::ParameterBag {
                &self.bag
            }
        }
    };
}

/// Implement `Command` and `ListCommand` for a list parameter structure.
///
/// Also adds the `page`, `pagesize` and `keyword` parameters every list
/// command supports.
macro_rules! list_command {
    ($params:ident => $response:ty, $command:literal) => {
        api_command!($params => $response, $command);

        impl $crate::command::ListCommand for $params {
            fn set_paging(&mut self, page: i32, page_size: i32) {
                self.bag.set("page", page);
                self.bag.set("pagesize", page_size);
            }
        }

        #[allow(dead_code)]
        impl $params {
            param_accessors!(
                /// Page number to fetch, starting with 1.
                page, set_page, with_page, reset_page: i32 = "page"
            );

            param_accessors!(
                /// Number of items per page.
                page_size, set_page_size, with_page_size, reset_page_size: i32 = "pagesize"
            );

            param_accessors!(
                /// Free text search.
                keyword, set_keyword, with_keyword, reset_keyword: String = "keyword"
            );
        }
    };
}

/// Define a list response: a `count` and a list of items under a key.
macro_rules! list_response {
    ($(#[$attr:meta])* $name:ident { $field:ident: $item:ty = $key:literal }) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Default, ::serde::Deserialize)]
        pub struct $name {
            /// Total number of matching items.
            #[serde(default)]
            pub count: usize,
            #[doc = concat!("Items under the `", $key, "` key.")]
            #[serde(default, rename = $key)]
            pub $field: Vec<$item>,
        }

        impl $crate::command::ListResponse for $name {
            type Item = $item;

            #[inline]
            fn count(&self) -> usize {
                self.count
            }

            #[inline]
            fn into_items(self) -> Vec<$item> {
                self.$field
            }
        }
    };
}

/// Define a string enumeration used both in parameters and in responses.
macro_rules! protocol_enum {
    {
        $(#[$attr:meta])*
        enum $name:ident {
            $($(#[$vattr:meta])* $item:ident = $val:literal),+ $(,)?
        }
    } => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vattr])* $item),+
        }

        impl $name {
            /// Value as sent over the wire.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$item => $val),+
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                String::from(value.as_str())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<$name, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                match value.to_uppercase().as_str() {
                    $(v if v == $val.to_uppercase() => Ok($name::$item),)+
                    _ => Err(<D::Error as ::serde::de::Error>::custom(format!(
                        "unknown {} value {}",
                        stringify!($name),
                        value
                    ))),
                }
            }
        }
    };
}
