//! Codec binding synthesis from a service's body and return types.

use crate::generation::descriptor::{CodecBinding, CodecKind};

/// Computes the codec bindings a service needs.
///
/// Types that are only decoded (returned but never sent) get a decoder,
/// types that are only encoded (sent but never returned) get an encoder,
/// and types used in both directions share one bidirectional codec.
/// Accessor names are sequential per kind, starting at 1, in first-use
/// order of the underlying type lists.
pub fn synthesize(body_types: &[String], return_types: &[String]) -> Vec<CodecBinding> {
    let mut bindings = Vec::new();

    let mut decoder_n = 0_usize;
    for ty in return_types {
        if !body_types.contains(ty) {
            decoder_n += 1;
            bindings.push(CodecBinding {
                ty: ty.clone(),
                kind: CodecKind::Decoder,
                accessor: format!("{}_{decoder_n}", CodecKind::Decoder.accessor_prefix()),
            });
        }
    }

    let mut encoder_n = 0_usize;
    for ty in body_types {
        if !return_types.contains(ty) {
            encoder_n += 1;
            bindings.push(CodecBinding {
                ty: ty.clone(),
                kind: CodecKind::Encoder,
                accessor: format!("{}_{encoder_n}", CodecKind::Encoder.accessor_prefix()),
            });
        }
    }

    let mut codec_n = 0_usize;
    for ty in return_types {
        if body_types.contains(ty) {
            codec_n += 1;
            bindings.push(CodecBinding {
                ty: ty.clone(),
                kind: CodecKind::Codec,
                accessor: format!("{}_{codec_n}", CodecKind::Codec.accessor_prefix()),
            });
        }
    }

    bindings
}

/// Accessor usable for decoding `ty`: its decoder, or its shared codec.
pub fn decoder_for<'a>(bindings: &'a [CodecBinding], ty: &str) -> Option<&'a str> {
    bindings
        .iter()
        .find(|b| b.ty == ty && matches!(b.kind, CodecKind::Decoder | CodecKind::Codec))
        .map(|b| b.accessor.as_str())
}

/// Accessor usable for encoding `ty`: its encoder, or its shared codec.
pub fn encoder_for<'a>(bindings: &'a [CodecBinding], ty: &str) -> Option<&'a str> {
    bindings
        .iter()
        .find(|b| b.ty == ty && matches!(b.kind, CodecKind::Encoder | CodecKind::Codec))
        .map(|b| b.accessor.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn each_direction_gets_its_own_kind() {
        let bodies = names(&["GreetingRequest", "Shared"]);
        let returns = names(&["GreetingResponse", "Shared"]);
        let bindings = synthesize(&bodies, &returns);

        assert_eq!(bindings.len(), 3);
        assert_eq!(bindings[0].ty, "GreetingResponse");
        assert_eq!(bindings[0].kind, CodecKind::Decoder);
        assert_eq!(bindings[0].accessor, "decoder_1");
        assert_eq!(bindings[1].ty, "GreetingRequest");
        assert_eq!(bindings[1].kind, CodecKind::Encoder);
        assert_eq!(bindings[1].accessor, "encoder_1");
        assert_eq!(bindings[2].ty, "Shared");
        assert_eq!(bindings[2].kind, CodecKind::Codec);
        assert_eq!(bindings[2].accessor, "codec_1");
    }

    #[test]
    fn suffixes_are_sequential_per_kind() {
        let bodies = names(&[]);
        let returns = names(&["A", "B", "C"]);
        let bindings = synthesize(&bodies, &returns);
        let accessors: Vec<_> = bindings.iter().map(|b| b.accessor.as_str()).collect();
        assert_eq!(accessors, ["decoder_1", "decoder_2", "decoder_3"]);
    }

    #[test]
    fn each_type_appears_in_exactly_one_binding() {
        let bodies = names(&["A", "B"]);
        let returns = names(&["B", "C"]);
        let bindings = synthesize(&bodies, &returns);
        for ty in ["A", "B", "C"] {
            assert_eq!(bindings.iter().filter(|b| b.ty == ty).count(), 1, "{ty}");
        }
    }

    #[test]
    fn lookups_resolve_through_shared_codecs() {
        let bodies = names(&["Shared", "OnlyOut"]);
        let returns = names(&["Shared", "OnlyIn"]);
        let bindings = synthesize(&bodies, &returns);

        assert_eq!(decoder_for(&bindings, "Shared"), Some("codec_1"));
        assert_eq!(encoder_for(&bindings, "Shared"), Some("codec_1"));
        assert_eq!(decoder_for(&bindings, "OnlyIn"), Some("decoder_1"));
        assert_eq!(encoder_for(&bindings, "OnlyOut"), Some("encoder_1"));
        assert_eq!(decoder_for(&bindings, "OnlyOut"), None);
        assert_eq!(encoder_for(&bindings, "OnlyIn"), None);
    }
}
