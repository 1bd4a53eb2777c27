use xml_value::{
	Mapper,
	Record,
	Value,
};

#[derive(Debug, PartialEq)]
struct Book {
	id: String,
	title: String,
}

struct BookMapper;

impl<'a> Mapper<&'a Book, Value> for BookMapper {
	fn map(&self, book: &'a Book) -> Value {
		Value::from(Record::new().with(
			"book",
			Record::new()
				.with("@attributes", Record::new().with("id", book.id.as_str()))
				.with("title", book.title.as_str()),
		))
	}
}

impl Mapper<Value, Option<Book>> for BookMapper {
	fn map(&self, data: Value) -> Option<Book> {
		let book = data.get("book")?;
		Some(Book {
			id: book.get("@attributes")?.get("id")?.as_str()?.to_owned(),
			title: book.get("title")?.as_str()?.to_owned(),
		})
	}
}

#[test]
fn item_round_trip() {
	let book = Book { id: "b1".into(), title: "Rust & XML".into() };
	let xml = xml_value::serialize_item(&book, &BookMapper).unwrap();
	assert!(xml.ends_with(r#"<book id="b1"><title>Rust &amp; XML</title></book>"#));
	let parsed: Option<Book> = xml_value::deserialize_xml(&xml, &BookMapper).unwrap();
	assert_eq!(parsed, Some(book));
}

#[test]
fn closures() {
	let count = xml_value::deserialize_xml_with("<r><a/><b/></r>", |data| {
		data.get("r").and_then(Value::as_record).map(|r| r.len())
	})
	.unwrap();
	assert_eq!(count, Some(2));
	let xml = xml_value::serialize_item("x", &|s: &str| Value::from(Record::new().with("s", s))).unwrap();
	assert!(xml.ends_with("<s>x</s>"));
}

#[test]
fn mapper_is_not_called_on_error() {
	let result = xml_value::deserialize_xml_with("<r>", |_| -> () { panic!("mapper must not run") });
	assert!(result.is_err());
}
