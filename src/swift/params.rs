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

//! Parameters of the Swift commands.

use super::protocol::{ImageStore, ImageStoreList};

command_params! {
    #[doc = "Parameters of `addSwift`."]
    AddSwift {
        #[doc = "Swift account."]
        account, set_account, with_account, reset_account: String = "account",
        #[doc = "Key of the Swift user."]
        key, set_key, with_key, reset_key: String = "key",
        #[doc = "URL of the Swift endpoint."]
        url, set_url, with_url, reset_url: String = "url",
        #[doc = "Swift user name."]
        username, set_username, with_username, reset_username: String = "username",
    }
}

impl AddSwift {
    /// Add a Swift store at the given URL.
    pub fn new<S: Into<String>>(url: S) -> AddSwift {
        AddSwift::default().with_url(url)
    }
}

api_command!(AddSwift => ImageStore, "addSwift", nested = "imagestore");

command_params! {
    #[doc = "Parameters of `listSwifts`."]
    ListSwifts {
        #[doc = "ID of the store."]
        id, set_id, with_id, reset_id: i64 = "id",
    }
}

impl ListSwifts {
    /// List all Swift stores.
    pub fn new() -> ListSwifts {
        ListSwifts::default()
    }
}

list_command!(ListSwifts => ImageStoreList, "listSwifts");
