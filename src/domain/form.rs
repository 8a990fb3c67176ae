use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

/// 日付として解釈できない入力をリクエストに載せる際の表記
pub const INVALID_DATE: &str = "Invalid Date";

/// テキスト入力欄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    FirstName,
    LastName,
    MobileNumber,
    EmailAddress,
}

impl TextField {
    pub const ALL: [TextField; 4] = [
        TextField::FirstName,
        TextField::LastName,
        TextField::MobileNumber,
        TextField::EmailAddress,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TextField::FirstName => "firstName",
            TextField::LastName => "lastName",
            TextField::MobileNumber => "mobileNumber",
            TextField::EmailAddress => "emailAddress",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TextField::FirstName => "First Name",
            TextField::LastName => "Last Name",
            TextField::MobileNumber => "Mobile Number",
            TextField::EmailAddress => "Email Address",
        }
    }
}

/// 日付入力欄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    CheckinDate,
    CheckoutDate,
}

impl DateField {
    pub const ALL: [DateField; 2] = [DateField::CheckinDate, DateField::CheckoutDate];

    pub fn name(&self) -> &'static str {
        match self {
            DateField::CheckinDate => "checkinDate",
            DateField::CheckoutDate => "checkoutDate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateField::CheckinDate => "Check In Date",
            DateField::CheckoutDate => "Check Out Date",
        }
    }
}

/// 日付入力の状態
///
/// 解釈できない入力はエラーにせず`Invalid`として保持する。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateInput {
    /// 未入力
    #[default]
    Empty,
    /// 正規化済みのタイムスタンプ
    Valid(DateTime<Utc>),
    /// 解釈できなかった生の入力
    Invalid(String),
}

impl DateInput {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            DateInput::Valid(at) => Some(*at),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, DateInput::Valid(_))
    }

    /// 入力欄に表示する値
    pub fn display_value(&self) -> String {
        match self {
            DateInput::Empty => String::new(),
            DateInput::Valid(at) => at.format("%Y-%m-%d").to_string(),
            DateInput::Invalid(raw) => raw.clone(),
        }
    }
}

/// ISO-8601（ミリ秒精度、UTC）で出力する
impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateInput::Empty => Ok(()),
            DateInput::Valid(at) => f.write_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true)),
            DateInput::Invalid(_) => f.write_str(INVALID_DATE),
        }
    }
}

impl Serialize for DateInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// 日付入力を解釈する（純粋関数）
///
/// 受け付ける形式：
/// - RFC 3339（タイムゾーン付き）
/// - `YYYY-MM-DD`（UTCの0時として扱う）
/// - `YYYY-MM-DDTHH:MM[:SS]`（UTCとして扱う）
pub fn parse_date_input(value: &str) -> DateInput {
    let value = value.trim();

    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return DateInput::Valid(at.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return DateInput::Valid(date.and_time(NaiveTime::MIN).and_utc());
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(at) = NaiveDateTime::parse_from_str(value, format) {
            return DateInput::Valid(at.and_utc());
        }
    }

    DateInput::Invalid(value.to_string())
}

/// 予約フォームの入力内容
///
/// ページの表示中だけ存在し、空の初期値から1項目ずつ更新される。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub email_address: String,
    pub checkin_date: DateInput,
    pub checkout_date: DateInput,
}

impl FormData {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FirstName => &self.first_name,
            TextField::LastName => &self.last_name,
            TextField::MobileNumber => &self.mobile_number,
            TextField::EmailAddress => &self.email_address,
        }
    }

    pub fn date(&self, field: DateField) -> &DateInput {
        match field {
            DateField::CheckinDate => &self.checkin_date,
            DateField::CheckoutDate => &self.checkout_date,
        }
    }

    /// 予約者の氏名（"姓 名"ではなく"名 姓"の順）
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// 純粋関数：テキスト項目を上書きする
///
/// バリデーションは行わない（空文字も受け付ける）。
pub fn update_text(mut form: FormData, field: TextField, value: &str) -> FormData {
    let slot = match field {
        TextField::FirstName => &mut form.first_name,
        TextField::LastName => &mut form.last_name,
        TextField::MobileNumber => &mut form.mobile_number,
        TextField::EmailAddress => &mut form.email_address,
    };
    *slot = value.to_string();
    form
}

/// 純粋関数：日付項目を解釈して上書きする
pub fn update_date(mut form: FormData, field: DateField, value: &str) -> FormData {
    let slot = match field {
        DateField::CheckinDate => &mut form.checkin_date,
        DateField::CheckoutDate => &mut form.checkout_date,
    };
    *slot = parse_date_input(value);
    form
}
