//! Обратная связь валидации полей формы.
//!
//! Проверку выполняет браузер (`required`, `pattern`, `type`, `min`/`max`),
//! здесь только отражается её результат в классах и сообщениях.

/// Поля формы, которые проверяются при отправке
pub const REQUIRED_FIELDS_SELECTOR: &str =
    "input[required], textarea[required], select[required]";

/// Презентационное состояние поля после проверки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMark {
    Valid,
    Invalid,
}

impl FieldMark {
    pub fn css_class(&self) -> &'static str {
        match self {
            FieldMark::Valid => "is-valid",
            FieldMark::Invalid => "is-invalid",
        }
    }
}

/// Поле с нативной проверкой ограничений и местом под сообщение об ошибке
pub trait ConstrainedField {
    fn check_validity(&self) -> bool;

    fn validation_message(&self) -> String;

    /// Ставит ровно один из классов `is-valid`/`is-invalid`
    fn set_mark(&self, mark: FieldMark);

    fn clear_mark(&self);

    /// Показывает сообщение, заменяя предыдущее
    fn show_error(&self, message: &str);

    fn clear_error(&self);
}

pub fn validate_field<F: ConstrainedField + ?Sized>(field: &F) -> bool {
    let is_valid = field.check_validity();
    if is_valid {
        field.set_mark(FieldMark::Valid);
        field.clear_error();
    } else {
        field.set_mark(FieldMark::Invalid);
        field.show_error(&field.validation_message());
    }
    is_valid
}

/// Проверяет все поля без короткого замыкания: каждое поле получает отметку,
/// даже если одно из предыдущих уже не прошло проверку.
pub fn validate_fields<'a, F, I>(fields: I) -> bool
where
    F: ConstrainedField + 'a,
    I: IntoIterator<Item = &'a F>,
{
    fields
        .into_iter()
        .map(|field| validate_field(field))
        .fold(true, |all_valid, valid| all_valid & valid)
}

pub fn clear_validation<'a, F, I>(fields: I)
where
    F: ConstrainedField + 'a,
    I: IntoIterator<Item = &'a F>,
{
    for field in fields {
        field.clear_mark();
        field.clear_error();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    pub struct FakeField {
        pub valid: bool,
        pub message: String,
        pub mark: RefCell<Option<FieldMark>>,
        pub errors: RefCell<Vec<String>>,
    }

    impl FakeField {
        pub fn new(valid: bool) -> Self {
            Self {
                valid,
                message: "Please fill out this field.".to_string(),
                ..Default::default()
            }
        }
    }

    impl ConstrainedField for FakeField {
        fn check_validity(&self) -> bool {
            self.valid
        }

        fn validation_message(&self) -> String {
            if self.valid {
                String::new()
            } else {
                self.message.clone()
            }
        }

        fn set_mark(&self, mark: FieldMark) {
            *self.mark.borrow_mut() = Some(mark);
        }

        fn clear_mark(&self) {
            *self.mark.borrow_mut() = None;
        }

        fn show_error(&self, message: &str) {
            let mut errors = self.errors.borrow_mut();
            errors.clear();
            errors.push(message.to_string());
        }

        fn clear_error(&self) {
            self.errors.borrow_mut().clear();
        }
    }

    #[test]
    fn test_validate_field_marks_invalid() {
        let field = FakeField::new(false);
        assert!(!validate_field(&field));
        assert_eq!(*field.mark.borrow(), Some(FieldMark::Invalid));
        assert_eq!(field.errors.borrow().as_slice(), ["Please fill out this field."]);
    }

    #[test]
    fn test_error_message_replaced_not_accumulated() {
        let field = FakeField::new(false);
        validate_field(&field);
        validate_field(&field);
        assert_eq!(field.errors.borrow().len(), 1);
    }

    #[test]
    fn test_fix_clears_error() {
        let mut field = FakeField::new(false);
        validate_field(&field);
        field.valid = true;
        assert!(validate_field(&field));
        assert_eq!(*field.mark.borrow(), Some(FieldMark::Valid));
        assert!(field.errors.borrow().is_empty());
    }

    #[test]
    fn test_validate_fields_checks_every_field() {
        // 5 полей, 2 валидных, порядок перемешан
        let fields: Vec<FakeField> = [false, true, false, false, true]
            .into_iter()
            .map(FakeField::new)
            .collect();

        assert!(!validate_fields(&fields));

        let count = |mark| {
            fields
                .iter()
                .filter(|f| *f.mark.borrow() == Some(mark))
                .count()
        };
        assert_eq!(count(FieldMark::Invalid), 3);
        assert_eq!(count(FieldMark::Valid), 2);
    }

    #[test]
    fn test_validate_fields_all_valid() {
        let fields: Vec<FakeField> = (0..3).map(|_| FakeField::new(true)).collect();
        assert!(validate_fields(&fields));
        assert!(validate_fields(&Vec::<FakeField>::new()));
    }

    #[test]
    fn test_clear_validation() {
        let fields = vec![FakeField::new(false), FakeField::new(true)];
        validate_fields(&fields);
        clear_validation(&fields);
        for field in &fields {
            assert_eq!(*field.mark.borrow(), None);
            assert!(field.errors.borrow().is_empty());
        }
    }
}
