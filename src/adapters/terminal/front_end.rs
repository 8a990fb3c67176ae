use crate::application::reservation_form::{
    FieldKind, FieldView, FormView, ReservationForm, ReserveButton,
};
use crate::domain::{DateField, TextField};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

/// Line-based terminal rendering of the reservation form
///
/// Every field is asked once, then the user picks an action. A failed
/// reserve returns to the action prompt with the input untouched, and an
/// empty line while editing keeps the field's current value.
pub struct FrontEnd<R, W> {
    input: Lines<R>,
    out: W,
}

impl<R, W> FrontEnd<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, out: W) -> Self {
        Self {
            input: input.lines(),
            out,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Drive the form until it navigates away or input closes
    pub async fn run(&mut self, form: &ReservationForm) -> std::io::Result<()> {
        self.write_header(form).await?;

        if !self.edit_fields(form).await? {
            return Ok(());
        }

        loop {
            self.write_summary(&form.view()).await?;

            let Some(action) = self.prompt("[r]eserve, [c]ancel or [e]dit").await? else {
                return Ok(());
            };
            match action.trim() {
                "r" | "reserve" => {
                    self.write("Reserving...\n").await?;
                    if form.handle_reserve().await.is_ok() {
                        return Ok(());
                    }
                }
                "c" | "cancel" => {
                    form.handle_cancel();
                    return Ok(());
                }
                "e" | "edit" => {
                    if !self.edit_fields(form).await? {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
    }

    /// Ask every field in display order, returns false when input closed
    async fn edit_fields(&mut self, form: &ReservationForm) -> std::io::Result<bool> {
        for field in TextField::ALL {
            let Some(value) = self.prompt_field(form, field.name()).await? else {
                return Ok(false);
            };
            if let Some(value) = value {
                form.handle_text_change(field)(&value);
            }
        }
        for field in DateField::ALL {
            let Some(value) = self.prompt_field(form, field.name()).await? else {
                return Ok(false);
            };
            if let Some(value) = value {
                form.handle_date_change(field)(&value);
            }
        }
        Ok(true)
    }

    /// `None` when input closed, `Some(None)` when the line was empty
    async fn prompt_field(
        &mut self,
        form: &ReservationForm,
        name: &str,
    ) -> std::io::Result<Option<Option<String>>> {
        let view = form.view();
        let label = match view.field(name) {
            Some(field) => field_prompt(field),
            None => name.to_string(),
        };

        Ok(self
            .prompt(&label)
            .await?
            .map(|line| (!line.trim().is_empty()).then_some(line)))
    }

    async fn prompt(&mut self, label: &str) -> std::io::Result<Option<String>> {
        self.write(&format!("{}: ", label)).await?;
        self.input.next_line().await
    }

    async fn write_header(&mut self, form: &ReservationForm) -> std::io::Result<()> {
        let view = form.view();
        let header = format!(
            "{}\n{}\nRoom: {}\n\n",
            view.title,
            view.description,
            form.room().room_type_name()
        );
        self.write(&header).await
    }

    async fn write_summary(&mut self, view: &FormView) -> std::io::Result<()> {
        let mut summary = String::from("\n");
        for field in &view.fields {
            summary.push_str(&format!("  {:<16} {}\n", field.label, field.value));
        }
        if let Some(error) = &view.error {
            summary.push_str(&format!("  ! {}\n", error));
        }
        let reserve = match &view.reserve {
            ReserveButton::Idle { label } => label.to_string(),
            ReserveButton::Submitting => "...".to_string(),
        };
        summary.push_str(&format!("  [{}] [{}]\n\n", view.cancel_label, reserve));

        self.write(&summary).await
    }

    async fn write(&mut self, text: &str) -> std::io::Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await
    }
}

fn field_prompt(field: &FieldView) -> String {
    let hint = match field.kind {
        FieldKind::Text => "",
        FieldKind::Date => " (YYYY-MM-DD)",
    };
    if field.value.is_empty() {
        format!("{}{}", field.label, hint)
    } else {
        format!("{}{} [{}]", field.label, hint, field.value)
    }
}
