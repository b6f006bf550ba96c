#![allow(missing_docs)]

use std::collections::HashMap;

use gdwire::variant::{Decoder, Dictionary, Float, Integer, Variant, Vector3, decode_from_slice, encode_to_vec};

fn round_trip(value: &Variant) -> Variant {
	let bytes = encode_to_vec(value).expect("value encodes");
	assert_eq!(bytes.len() % 4, 0, "wire image must stay word aligned");
	Decoder::new(bytes.as_slice()).decode_variant().expect("value decodes")
}

#[test]
fn scalars_round_trip() {
	assert_eq!(round_trip(&Variant::Int(-3)), Variant::Int(-3));
	assert_eq!(round_trip(&Variant::Int(0)), Variant::Int(0));
	assert_eq!(round_trip(&Variant::Float(-5.0)), Variant::Float(-5.0));
	assert_eq!(round_trip(&Variant::Float(0.42)), Variant::Float(0.42));
}

#[test]
fn text_round_trips_including_empty() {
	for text in ["", "a", "abc", "abcd", "field A", "option 1"] {
		assert_eq!(round_trip(&Variant::Str(text.to_owned())), Variant::Str(text.to_owned()));
	}
}

#[test]
fn vector3_round_trips() {
	let v = Variant::Vector3(Vector3::new(42.0, 4.2, 0.42));
	assert_eq!(round_trip(&v), v);
}

#[test]
fn homogeneous_sequences_round_trip_including_empty() {
	for elems in [vec![], vec![43], vec![43, 215, 16]] {
		let node = Variant::IntArray(elems);
		assert_eq!(round_trip(&node), node);
	}

	for elems in [vec![], vec![1.5, -2.25]] {
		let node = Variant::FloatArray(elems);
		assert_eq!(round_trip(&node), node);
	}
}

#[test]
fn heterogeneous_sequence_round_trips() {
	let node = Variant::Array(vec![
		Variant::Int(1),
		Variant::Str("two".to_owned()),
		Variant::FloatArray(vec![3.0]),
		Variant::Array(vec![]),
	]);
	assert_eq!(round_trip(&node), node);
}

#[test]
fn dictionaries_round_trip_preserving_pairs() {
	for pairs in [0, 1, 7] {
		let mut dict = Dictionary::new();
		for index in 0..pairs {
			dict.insert(format!("key{index}"), Variant::Int(index));
		}
		let node = Variant::Dict(dict);
		assert_eq!(round_trip(&node), node);
	}
}

#[test]
fn nested_combinations_round_trip() {
	let mut inner = Dictionary::new();
	inner.insert("list", Variant::IntArray(vec![43, 215, 16]));
	inner.insert("vector", Variant::Vector3(Vector3::new(1.0, 2.0, 3.0)));

	let mut outer = Dictionary::new();
	outer.insert("name", Variant::Str("outer".to_owned()));
	outer.insert("inner", Variant::Dict(inner));
	outer.insert("mixed", Variant::Array(vec![Variant::Float(4.0), Variant::Str("x".to_owned())]));

	let node = Variant::Dict(outer);
	assert_eq!(round_trip(&node), node);
}

#[test]
fn native_values_round_trip_through_typed_destinations() {
	let bytes = encode_to_vec("field A").expect("text encodes");
	let mut text = String::new();
	decode_from_slice(&bytes, &mut text).expect("text maps");
	assert_eq!(text, "field A");

	let bytes = encode_to_vec(&vec![43_u32, 215, 16]).expect("sequence encodes");
	let mut list: Vec<u32> = Vec::new();
	decode_from_slice(&bytes, &mut list).expect("sequence maps");
	assert_eq!(list, [43, 215, 16]);

	let mut source = HashMap::new();
	source.insert("o1".to_owned(), "option 1".to_owned());
	source.insert("o2".to_owned(), "option 2".to_owned());
	let bytes = encode_to_vec(&source).expect("map encodes");
	let mut dest: HashMap<String, String> = HashMap::new();
	decode_from_slice(&bytes, &mut dest).expect("map maps");
	assert_eq!(dest, source);
}

#[test]
fn numeric_aliases_round_trip() {
	let bytes = encode_to_vec(&Integer(-3)).expect("integer alias encodes");
	let mut index = Integer::default();
	decode_from_slice(&bytes, &mut index).expect("integer alias maps");
	assert_eq!(index, Integer(-3));

	let bytes = encode_to_vec(&Float(-5.0)).expect("float alias encodes");
	let mut strength = Float::default();
	decode_from_slice(&bytes, &mut strength).expect("float alias maps");
	assert_eq!(strength, Float(-5.0));
}

#[test]
fn wide_scalars_truncate_then_extend_per_destination() {
	let bytes = encode_to_vec(&0xDEAD_BEEF_1234_5678_u64).expect("u64 encodes");
	let mut narrow = 0_u32;
	decode_from_slice(&bytes, &mut narrow).expect("u32 maps");
	assert_eq!(narrow, 0x1234_5678, "only the low word survives the wire");

	let bytes = encode_to_vec(&-1_i64).expect("i64 encodes");
	let mut signed = 0_i64;
	decode_from_slice(&bytes, &mut signed).expect("i64 maps");
	assert_eq!(signed, -1, "signed destination sign-extends");

	let mut unsigned = 0_u64;
	decode_from_slice(&bytes, &mut unsigned).expect("u64 maps");
	assert_eq!(unsigned, u64::from(u32::MAX), "unsigned destination zero-extends");
}
