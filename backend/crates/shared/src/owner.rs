//! Owner-scoped stores
//!
//! アカウント削除時に、他コンテキストが所有するデータを
//! 所有者 ID 単位で一括削除するための契約です。

use crate::error::app_error::AppResult;
use crate::id::UserId;

/// 所有者単位で一括削除できるストア
///
/// 削除は冪等でなければなりません（対象が存在しなくても `Ok(0)`）。
/// 呼び出し側は失敗時に再試行します。
#[trait_variant::make(OwnedResourceStore: Send)]
pub trait LocalOwnedResourceStore {
    /// ログに出すリソース名（例: "posts"）
    fn resource_name(&self) -> &'static str;

    /// `owner` が所有するレコードをすべて削除し、削除件数を返す
    async fn delete_all_by_owner(&self, owner: &UserId) -> AppResult<u64>;
}
