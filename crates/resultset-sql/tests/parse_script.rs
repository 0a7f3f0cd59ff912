//! Script parsing tests

use pretty_assertions::assert_eq;
use resultset_sql::{parse_script, Column, DataType, ParseError};

const USERS: &str = "CREATE TABLE #Users (
    Id INT,
    Name NVARCHAR(50),
    Email NVARCHAR(100)
);

-- Inserting mock data into the #Users table
INSERT INTO #Users (Id, Name, Email)
VALUES
(1, 'John Doe', 'john@example.com'),
(2, 'Jane Smith', 'jane@example.com'),
(3, 'Bob Johnson', 'bob@example.com');
";

#[test]
fn test_schema_only() {
    let def = parse_script("CREATE TABLE #T (Id INT, Name NVARCHAR(50));").unwrap();

    assert_eq!(def.name, "T");
    assert_eq!(
        def.columns,
        vec![
            Column::new("Id", DataType::Int32),
            Column::new("Name", DataType::String),
        ]
    );
    assert!(def.rows.is_empty());
}

#[test]
fn test_row_with_literal_cleaning() {
    let def = parse_script(
        "CREATE TABLE #T (Id INT, Name NVARCHAR(50)); INSERT INTO #T (Id, Name) VALUES (1, 'Test');",
    )
    .unwrap();

    assert_eq!(def.rows.len(), 1);
    assert_eq!(def.value(0, "Id"), Some("1"));
    assert_eq!(def.value(0, "Name"), Some("Test"));
}

#[test]
fn test_users_script() {
    let def = parse_script(USERS).unwrap();

    assert_eq!(def.name, "Users");
    assert_eq!(def.columns.len(), 3);
    assert_eq!(def.rows.len(), 3);
    assert_eq!(def.value(1, "Name"), Some("Jane Smith"));
    assert_eq!(def.value(2, "Email"), Some("bob@example.com"));
}

#[test]
fn test_bracketed_columns_match_bare_columns() {
    let bracketed = parse_script("CREATE TABLE #t ( [ID] int, [Name] nvarchar(50) )").unwrap();
    let bare = parse_script("CREATE TABLE #t ( ID int, Name nvarchar(50) )").unwrap();

    assert_eq!(bracketed, bare);
}

#[test]
fn test_bracketed_names_may_contain_spaces() {
    let def = parse_script(
        "CREATE TABLE #temptable ([First Name] nvarchar(50), [Age] int)\n\
         INSERT INTO #temptable ([First Name], [Age]) VALUES ('Ann', 30)",
    )
    .unwrap();

    assert_eq!(def.columns[0].name, "First Name");
    assert_eq!(def.value(0, "First Name"), Some("Ann"));
    assert_eq!(def.value(0, "Age"), Some("30"));
}

#[test]
fn test_multiline_column_definition() {
    let def = parse_script("CREATE TABLE #T (\nId INT,\nName \nNVARCHAR(50)\n)").unwrap();
    assert_eq!(def.columns[1], Column::new("Name", DataType::String));
}

#[test]
fn test_unquoted_string_value() {
    let def = parse_script(
        "CREATE TABLE #T (Id INT, Name NVARCHAR(50))\nINSERT INTO #T (Id, Name) VALUES\n(1, TestName)",
    )
    .unwrap();
    assert_eq!(def.value(0, "Name"), Some("TestName"));
}

#[test]
fn test_unicode_prefix_matches_plain_literal() {
    let script = |literal: &str| {
        format!("CREATE TABLE #T (Name NVARCHAR(10)); INSERT INTO #T (Name) VALUES ({literal});")
    };
    let prefixed = parse_script(&script("N'abc'")).unwrap();
    let plain = parse_script(&script("'abc'")).unwrap();

    assert_eq!(prefixed, plain);
    assert_eq!(prefixed.value(0, "Name"), Some("abc"));
}

#[test]
fn test_insert_order_differs_from_declaration() {
    let def = parse_script(
        "CREATE TABLE #T (Id INT, Name NVARCHAR(50), Age INT)\n\
         INSERT INTO #T (Name, Id) VALUES ('Ann', 1), ('Bob', 2)",
    )
    .unwrap();

    assert_eq!(def.rows[1].values, vec![Some("2".into()), Some("Bob".into()), None]);
}

#[test]
fn test_quoted_values_keep_commas_and_parens() {
    let def = parse_script(
        "CREATE TABLE #T (Note NVARCHAR(MAX), Price DECIMAL(10,2))\n\
         INSERT INTO #T (Note, Price) VALUES ('Smith, John (Jr.)', 12.50), ('it''s', NULL)",
    )
    .unwrap();

    assert_eq!(def.value(0, "Note"), Some("Smith, John (Jr.)"));
    assert_eq!(def.value(0, "Price"), Some("12.50"));
    assert_eq!(def.value(1, "Note"), Some("it's"));
    assert_eq!(def.value(1, "Price"), None);
}

#[test]
fn test_keywords_are_case_insensitive() {
    let def = parse_script("create table #t (id int); insert into #t (id) values (5);").unwrap();
    assert_eq!(def.value(0, "id"), Some("5"));
}

#[test]
fn test_leading_region_is_ignored() {
    let def = parse_script("SET NOCOUNT ON;\nGO\nCREATE TABLE #T (Id INT)").unwrap();
    assert_eq!(def.name, "T");
}

#[test]
fn test_duplicate_column_names_are_kept() {
    let def = parse_script("CREATE TABLE #T (Id INT, Id BIGINT)").unwrap();
    assert_eq!(def.columns.len(), 2);
    assert_eq!(def.columns[1].data_type, DataType::Int64);
}

#[test]
fn test_multiple_statements() {
    assert_eq!(
        parse_script("CREATE TABLE #A (Id INT); CREATE TABLE #B (Id INT);"),
        Err(ParseError::MultipleStatements)
    );
    assert_eq!(
        parse_script(
            "CREATE TABLE #A (Id INT); INSERT INTO #A (Id) VALUES (1); INSERT INTO #A (Id) VALUES (2);"
        ),
        Err(ParseError::MultipleStatements)
    );
}

#[test]
fn test_invalid_table_definition() {
    assert_eq!(
        parse_script("SELECT * FROM Users"),
        Err(ParseError::InvalidTableDefinition)
    );
    assert_eq!(
        parse_script("CREATE TABLE Users (Id INT)"),
        Err(ParseError::InvalidTableDefinition)
    );
    assert_eq!(parse_script(""), Err(ParseError::InvalidTableDefinition));
}

#[test]
fn test_no_columns() {
    assert_eq!(parse_script("CREATE TABLE #T ()"), Err(ParseError::NoColumns));
}

#[test]
fn test_insert_into_other_table_is_rejected() {
    assert_eq!(
        parse_script("CREATE TABLE #T (Id INT); INSERT INTO #U (Id) VALUES (1);"),
        Err(ParseError::InvalidInsertStatement)
    );
}

#[test]
fn test_undeclared_column() {
    assert_eq!(
        parse_script("CREATE TABLE #T (Id INT); INSERT INTO #T (Id, Age) VALUES (1, 2);"),
        Err(ParseError::UndeclaredColumn("Age".into()))
    );
}

#[test]
fn test_empty_value() {
    assert_eq!(
        parse_script("CREATE TABLE #T (Id INT, Name NVARCHAR(5)); INSERT INTO #T (Id, Name) VALUES (1, );"),
        Err(ParseError::EmptyValue {
            row: 0,
            column: "Name".into()
        })
    );
}

#[test]
fn test_value_count_mismatch() {
    assert_eq!(
        parse_script(
            "CREATE TABLE #T (Id INT, Name NVARCHAR(5)); INSERT INTO #T (Id, Name) VALUES (1, 'a'), (2);"
        ),
        Err(ParseError::ValueCountMismatch {
            row: 1,
            expected: 2,
            actual: 1
        })
    );
}

#[test]
fn test_unterminated_literal() {
    assert_eq!(
        parse_script("CREATE TABLE #T (Name NVARCHAR(5)); INSERT INTO #T (Name) VALUES ('abc);"),
        Err(ParseError::UnterminatedLiteral)
    );
}

#[test]
fn test_statement_keywords_inside_literals() {
    let def = parse_script(
        "CREATE TABLE #T (Note NVARCHAR(50));\n\
         INSERT INTO #T (Note) VALUES ('run INSERT INTO later'), ('see CREATE TABLE docs');",
    )
    .unwrap();

    assert_eq!(def.rows.len(), 2);
    assert_eq!(def.value(0, "Note"), Some("run INSERT INTO later"));
    assert_eq!(def.value(1, "Note"), Some("see CREATE TABLE docs"));
}

#[test]
fn test_apostrophe_in_bracketed_column() {
    let def = parse_script(
        "CREATE TABLE #T ([O'Brien] INT, Name NVARCHAR(5));\n\
         INSERT INTO #T ([O'Brien], Name) VALUES (1, 'a');",
    )
    .unwrap();

    assert_eq!(
        def.columns,
        vec![
            Column::new("O'Brien", DataType::Int32),
            Column::new("Name", DataType::String),
        ]
    );
    assert_eq!(def.value(0, "O'Brien"), Some("1"));
    assert_eq!(def.value(0, "Name"), Some("a"));
}

#[test]
fn test_trailing_batch_separator() {
    let def = parse_script(
        "CREATE TABLE #T (Id INT)\nGO\nINSERT INTO #T (Id) VALUES (1), (2);\nGO\n",
    )
    .unwrap();
    assert_eq!(def.rows.len(), 2);

    assert_eq!(
        parse_script("CREATE TABLE #T (Id INT); INSERT INTO #T (Id) VALUES (1); SELECT * FROM #T;"),
        Err(ParseError::InvalidInsertStatement)
    );
}
