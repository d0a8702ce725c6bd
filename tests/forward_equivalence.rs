//! `forward_like` must agree with native forwarding wherever the latter
//! compiles, at both levels.

use likewise::marker::{assert_type_eq, ForwardLikeT, ForwardT};
use likewise::profile::{forward, forward_like, CvQualifiers, QualifiedType, QualifierProfile, ValueCategory};
use likewise::qualified;

// Type-level table. Names: category (V/L/R), then C for const and W for volatile.
type V = qualified!(i32);
type VC = qualified!(i32 const);
type VW = qualified!(i32 volatile);
type VCW = qualified!(i32 volatile const);
type L = qualified!(i32&);
type LC = qualified!(i32 const&);
type LW = qualified!(i32 volatile&);
type LCW = qualified!(i32 volatile const&);
type R = qualified!(i32&&);
type RC = qualified!(i32 const&&);
type RW = qualified!(i32 volatile&&);
type RCW = qualified!(i32 volatile const&&);

macro_rules! agree {
    ($($model:ty => $($arg:ty),+;)*) => {
        $($(
            assert_type_eq::<ForwardT<$model, $arg>, ForwardLikeT<$model, $arg>>();
        )+)*
    };
}

#[test]
fn type_level_forward_like_matches_native_forward() {
    agree! {
        V => V, L, R;
        VC => V, VC, L, LC, R, RC;
        VW => V, VW, L, LW, R, RW;
        VCW => V, VC, VW, VCW, L, LC, LW, LCW, R, RC, RW, RCW;
        L => L;
        LC => L, LC;
        LW => L, LW;
        LCW => L, LC, LW, LCW;
        R => V, L, R;
        RC => V, VC, L, LC, R, RC;
        RW => V, VW, L, LW, R, RW;
        RCW => V, VC, VW, VCW, L, LC, LW, LCW, R, RC, RW, RCW;
    }
}

fn int(profile: QualifierProfile) -> QualifiedType {
    QualifiedType::new("int", profile)
}

fn argument_forms() -> impl Iterator<Item = QualifiedType> {
    [ValueCategory::Lvalue, ValueCategory::Rvalue]
        .into_iter()
        .flat_map(|category| CvQualifiers::ALL.into_iter().map(move |cv| int(QualifierProfile::new(category, cv))))
}

#[test]
fn data_level_forward_like_matches_native_forward() {
    let mut compared = 0;
    for model in QualifierProfile::ALL.map(int) {
        for arg in argument_forms() {
            if let Ok(native) = forward(&model, &arg) {
                let like = forward_like(model.profile, &arg)
                    .unwrap_or_else(|e| panic!("forward_like<{model}>({arg}) failed: {e}"));
                assert_eq!(like, native, "forward_like<{model}>({arg})");
                compared += 1;
            }
        }
    }
    // 9 qualifier pairs survive the subset rule; value and rvalue models take
    // both argument kinds, lvalue models only lvalues.
    assert_eq!(compared, 45);
}

#[test]
fn forward_like_extends_native_forward() {
    // Native forwarding refuses to drop `const`; forward_like keeps it instead.
    let model: QualifiedType = "int&".parse().unwrap();
    let arg: QualifiedType = "int const&".parse().unwrap();
    assert!(forward(&model, &arg).is_err());
    assert_eq!(forward_like(model.profile, &arg).unwrap().to_string(), "int const&");

    // The model may name an unrelated type.
    let model: QualifiedType = "std::string&&".parse().unwrap();
    let arg: QualifiedType = "int&".parse().unwrap();
    assert!(forward(&model, &arg).is_err());
    assert_eq!(forward_like(model.profile, &arg).unwrap().to_string(), "int&&");
}
