use crate::domain::{DateField, FormData, TextField};

pub const TITLE: &str = "Reserve a room";
pub const DESCRIPTION: &str =
    "Enter your details and click \"Reserve\". You can pay at the check-in.";

const CANCEL_LABEL: &str = "Cancel";
const RESERVE_LABEL: &str = "Reserve";

/// 入力欄の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
}

/// 入力欄1つ分の表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: String,
}

/// 予約ボタンの表示
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReserveButton {
    /// 押下可能
    Idle { label: &'static str },
    /// 送信中（無効化し、ラベルの代わりに進捗表示）
    Submitting,
}

impl ReserveButton {
    pub fn is_enabled(&self) -> bool {
        matches!(self, ReserveButton::Idle { .. })
    }
}

/// 予約フォーム画面の表示モデル
///
/// フロントエンドはこの値だけを見て描画する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub title: &'static str,
    pub description: &'static str,
    pub fields: Vec<FieldView>,
    pub cancel_label: &'static str,
    pub reserve: ReserveButton,
    /// 直近の送信失敗
    pub error: Option<String>,
}

impl FormView {
    pub fn field(&self, name: &str) -> Option<&FieldView> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// 純粋関数：フォームの状態から表示モデルを作る
pub fn render(form: &FormData, loading: bool, error: Option<String>) -> FormView {
    let text_fields = TextField::ALL.into_iter().map(|field| FieldView {
        name: field.name(),
        label: field.label(),
        kind: FieldKind::Text,
        value: form.text(field).to_string(),
    });
    let date_fields = DateField::ALL.into_iter().map(|field| FieldView {
        name: field.name(),
        label: field.label(),
        kind: FieldKind::Date,
        value: form.date(field).display_value(),
    });

    FormView {
        title: TITLE,
        description: DESCRIPTION,
        fields: text_fields.chain(date_fields).collect(),
        cancel_label: CANCEL_LABEL,
        reserve: if loading {
            ReserveButton::Submitting
        } else {
            ReserveButton::Idle {
                label: RESERVE_LABEL,
            }
        },
        error,
    }
}
