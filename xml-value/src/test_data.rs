use crate::value::{
	Record,
	Value,
};

pub const DOCUMENT_1: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<data key="abc" other="42">
	<foo/>
	<items>
		<item>a</item>
		<item>a2</item>
	</items>
	<x id="1">hi</x>
	<raw><![CDATA[<raw>]]></raw>
</data>"#;

pub const SERIALIZED_1: &str = concat!(
	r#"<?xml version="1.0" encoding="UTF-8"?>"#,
	r#"<data key="abc" other="42"><foo/><items><item>a</item><item>a2</item></items>"#,
	r#"<x id="1">hi</x><raw><![CDATA[<raw>]]></raw></data>"#,
);

pub fn value_1() -> Value {
	Value::from(Record::new().with(
		"data",
		Record::new()
			.with("@attributes", Record::new().with("key", "abc").with("other", "42"))
			.with("foo", Record::new())
			.with(
				"items",
				vec![
					Value::from(Record::new().with("item", "a")),
					Value::from(Record::new().with("item", "a2")),
				],
			)
			.with(
				"x",
				Record::new().with("@attributes", Record::new().with("id", "1")).with("@data", "hi"),
			)
			.with("raw", Record::new().with("@cdata", "<raw>")),
	))
}
