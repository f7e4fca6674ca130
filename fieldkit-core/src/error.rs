/// The Error type for the fieldkit crate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The field does not allow its value to be read or written through its descriptor.
    AccessDenied {
        /// Name of the field.
        field: &'static str,
    },
    /// The instance passed to an accessor is not of the field's owning type.
    InvalidInstance {
        /// Name of the field.
        field: &'static str,
        /// Name of the type owning the field.
        expected: &'static str,
    },
    /// The value passed to a setter is not of the field's declared type.
    InvalidValue {
        /// Name of the field.
        field: &'static str,
    },
    /// Origin and target of a copy are instances of different types.
    TypeMismatch {
        /// Name of the origin's type.
        origin: &'static str,
        /// Name of the target's type.
        target: &'static str,
    },
    /// The field is not declared as one of the recognized collection types.
    NotCollection {
        /// Name of the field.
        field: &'static str,
    },
    /// The type declares no field with the given name.
    NoSuchField {
        /// Name of the type.
        ty: &'static str,
        /// The name that was looked up.
        field: alloc::string::String,
    },
}

impl Error {
    /// Whether the error was caused by an argument the operation is not defined for.
    ///
    /// This is the case for [`Error::TypeMismatch`] and [`Error::NotCollection`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. } | Error::NotCollection { .. })
    }
}

/// The Result type for the fieldkit crate.
pub type Result<T> = core::result::Result<T, Error>;

impl core::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::AccessDenied { field } => write!(f, "Access to field `{field}` denied"),
            Error::InvalidInstance { field, expected } => write!(
                f,
                "Field `{field}` can only be accessed on instances of `{expected}`"
            ),
            Error::InvalidValue { field } => {
                write!(f, "Value can not be assigned to field `{field}`")
            }
            Error::TypeMismatch { origin, target } => write!(
                f,
                "Can not copy an instance of `{origin}` into an instance of `{target}`"
            ),
            Error::NotCollection { field } => {
                write!(f, "Field `{field}` is not declared as a collection")
            }
            Error::NoSuchField { ty, field } => write!(f, "Type `{ty}` has no field `{field}`"),
        }
    }
}
