// tests/sql/dialect_test.rs
#[cfg(test)]
mod tests {
    use fluentsql::prelude::*;

    /// Overrides table rendering only.
    #[derive(Debug)]
    struct SchemaQualified;

    impl SqlDialect for SchemaQualified {
        fn name(&self) -> &'static str {
            "schema-qualified"
        }

        fn render_table(&self, table: &Table) -> RenderResult {
            Ok(format!("dbo.{}", table.name))
        }
    }

    /// Quotes string constants and parenthesises the TOP value.
    #[derive(Debug)]
    struct Quoting;

    impl SqlDialect for Quoting {
        fn name(&self) -> &'static str {
            "quoting"
        }

        fn render_constant(&self, expression: &ConstantExpression) -> RenderResult {
            match expression.value() {
                Value::String(s) => Ok(format!("'{}'", s.replace('\'', "''"))),
                Value::Null => Ok("NULL".into()),
                _ => Standard.render_constant(expression),
            }
        }

        fn render_top(&self, top: &Top) -> RenderResult {
            Ok(match top.kind {
                TopKind::Count => format!("TOP ({}) ", top.value),
                TopKind::Percent => format!("TOP ({}) PERCENT ", top.value),
            })
        }
    }

    fn sample() -> Select {
        Select::top_count(5)
            .all()
            .column("Name")
            .constant(42)
            .constant("it's")
            .from("Users")
            .build()
    }

    #[test]
    fn test_override_only_changes_tables() {
        let select = sample();
        let standard = select.to_sql(&Standard).unwrap();
        let custom = select.to_sql(&SchemaQualified).unwrap();

        assert_eq!(standard, "SELECT TOP 5 *, [Name], 42, it's\r\nFROM Users");
        assert_eq!(custom, "SELECT TOP 5 *, [Name], 42, it's\r\nFROM dbo.Users");

        // Everything before the FROM clause is byte-identical.
        let prefix = |s: &str| s.split("\r\nFROM ").next().map(str::to_owned);
        assert_eq!(prefix(&standard), prefix(&custom));
    }

    #[test]
    fn test_override_constants_and_top() {
        let sql = sample().to_sql(&Quoting).unwrap();
        assert_eq!(sql, "SELECT TOP (5) *, [Name], 42, 'it''s'\r\nFROM Users");
    }

    #[test]
    fn test_custom_dialect_handles_null() {
        let select = Select::constant(None::<&str>).build();
        assert!(select.to_sql(&Standard).is_err());
        assert_eq!(select.to_sql(&Quoting).unwrap(), "SELECT NULL");
    }

    #[test]
    fn test_dyn_dialect() {
        let dialect: Box<dyn SqlDialect> = Box::new(SchemaQualified);
        let sql = Select::all().from("Users").to_sql(dialect.as_ref()).unwrap();
        assert_eq!(sql, "SELECT *\r\nFROM dbo.Users");
    }

    #[test]
    fn test_enum_matches_concrete_types() {
        let select = sample();
        assert_eq!(
            select.to_sql(&Dialect::TSql).unwrap(),
            select.to_sql(&TSql).unwrap()
        );
        assert_eq!(
            select.to_sql(&Dialect::Ansi).unwrap(),
            select.to_sql(&Ansi).unwrap()
        );
        assert_eq!(
            select.to_sql(&Dialect::Standard).unwrap(),
            select.to_sql(&Standard).unwrap()
        );
    }

    #[test]
    fn test_tsql_output() {
        let sql = sample().to_sql(&TSql).unwrap();
        assert_eq!(sql, "SELECT TOP 5 *, [Name], 42, 'it''s'\r\nFROM [Users]");
    }

    #[test]
    fn test_ansi_output() {
        let sql = sample().to_sql(&Ansi).unwrap();
        assert_eq!(
            sql,
            "SELECT *, \"Name\", 42, 'it''s'\nFROM \"Users\"\nFETCH FIRST 5 ROWS ONLY"
        );
    }

    #[test]
    fn test_rendering_is_idempotent_across_dialects() {
        let select = sample();
        let snapshot = select.clone();
        for dialect in [Dialect::Standard, Dialect::TSql, Dialect::Ansi] {
            assert_eq!(
                select.to_sql(&dialect).unwrap(),
                select.to_sql(&dialect).unwrap()
            );
        }
        assert_eq!(select, snapshot);
    }
}
