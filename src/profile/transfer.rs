//! Qualifier transfer and the two forwarding primitives built on it.

use core::fmt;

use super::category::ValueCategory;
use super::qualified::{QualifiedType, QualifierProfile};

/// Rejections produced by [`forward_like`] and [`forward`].
///
/// At the type level ([`crate::marker`]) these are compile errors; here they
/// are values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// An lvalue result was requested for an argument that is only an rvalue.
    DanglingLvalue {
        /// The requested profile.
        model: QualifierProfile,
        /// The argument.
        arg: QualifiedType,
    },
    /// Native forwarding cannot remove a qualifier the argument carries.
    DropsQualifier {
        /// The model type.
        model: QualifiedType,
        /// The argument.
        arg: QualifiedType,
    },
    /// Native forwarding needs the model and argument to name the same base.
    BaseMismatch {
        /// The model type.
        model: QualifiedType,
        /// The argument.
        arg: QualifiedType,
    },
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferError::DanglingLvalue { model, arg } => write!(
                f,
                "cannot forward rvalue `{arg}` as `{model}`: converting an rvalue to an lvalue is forbidden"
            ),
            TransferError::DropsQualifier { model, arg } => {
                write!(f, "forwarding `{arg}` as `{model}` would drop a qualifier")
            }
            TransferError::BaseMismatch { model, arg } => {
                write!(f, "cannot forward `{arg}` as unrelated type `{model}`")
            }
        }
    }
}

impl std::error::Error for TransferError {}

/// Re-qualifies `target` with `model`'s profile.
///
/// The result keeps the target's base. Its category is the model's, and its
/// cv qualifiers are the union of both sides, so a qualifier already on the
/// target is never stripped.
///
/// ```
/// use likewise::profile::{like, QualifiedType};
///
/// let model: QualifiedType = "long const&".parse().unwrap();
/// let target: QualifiedType = "int".parse().unwrap();
/// assert_eq!(like(model.profile, &target).to_string(), "int const&");
/// ```
pub fn like(model: QualifierProfile, target: &QualifiedType) -> QualifiedType {
    let profile = QualifierProfile::new(model.category, target.cv().union(model.cv));
    QualifiedType::new(target.base.clone(), profile)
}

/// Forwards `arg` with `model`'s shape.
///
/// The model is collapsed first (a plain value model asks for an rvalue).
/// Only the model's shape matters; its base may be unrelated to `arg`'s.
///
/// `arg` is an expression: `Lvalue` is an lvalue, while `Value` and `Rvalue`
/// are both rvalues.
///
/// # Errors
///
/// Returns [`TransferError::DanglingLvalue`] if the model asks for an lvalue
/// while `arg` is an rvalue.
pub fn forward_like(model: QualifierProfile, arg: &QualifiedType) -> Result<QualifiedType, TransferError> {
    let collapsed = model.with_category(model.category.collapse());
    if collapsed.category == ValueCategory::Lvalue && arg.category() != ValueCategory::Lvalue {
        return Err(TransferError::DanglingLvalue {
            model: collapsed,
            arg: arg.clone(),
        });
    }
    Ok(like(collapsed, arg))
}

/// Native single-argument forwarding: `arg` cast to `model` collapsed.
///
/// # Errors
///
/// - [`TransferError::BaseMismatch`] if the bases differ.
/// - [`TransferError::DropsQualifier`] if `arg` carries a qualifier `model`
///   does not.
/// - [`TransferError::DanglingLvalue`] as for [`forward_like`].
pub fn forward(model: &QualifiedType, arg: &QualifiedType) -> Result<QualifiedType, TransferError> {
    if model.base != arg.base {
        return Err(TransferError::BaseMismatch {
            model: model.clone(),
            arg: arg.clone(),
        });
    }
    if !model.cv().contains(arg.cv()) {
        return Err(TransferError::DropsQualifier {
            model: model.clone(),
            arg: arg.clone(),
        });
    }
    let category = model.category().collapse();
    if category == ValueCategory::Lvalue && arg.category() != ValueCategory::Lvalue {
        return Err(TransferError::DanglingLvalue {
            model: model.profile.with_category(category),
            arg: arg.clone(),
        });
    }
    Ok(QualifiedType::new(model.base.clone(), model.profile.with_category(category)))
}
