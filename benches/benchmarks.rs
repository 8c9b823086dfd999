use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sqlclause::{
    AlterParser, CreateParser, InsertParser, ParserRegistry, SelectParser, SqlParser,
};

const SELECT: &str = "select id, name, total from orders where total > 100 and status = 'open' \
                      group by name order by total desc limit 50;";
const SUB_QUERY_SELECT: &str =
    "select * from (select id from a where x = 1;) join (select id from b;) where id > 3;";
const CREATE: &str = "create table orders (id int, name varchar(64), total decimal(10,2)) \
                      ENGINE=InnoDB DEFAULT CHARSET=utf8;";
const ALTER: &str = "alter table orders add index idx_name (name, total);";

fn insert_sql(rows: usize) -> String {
    let tuples: Vec<String> = (0..rows)
        .map(|i| format!("({}, 'name_{}', {}.5)", i, i, i))
        .collect();
    format!("insert into orders (id, name, total) values {};", tuples.join(", "))
}

fn bench_select(c: &mut Criterion) {
    c.bench_function("parse_select", |b| {
        b.iter(|| SelectParser.parse_sql(black_box(SELECT)).unwrap());
    });
    c.bench_function("parse_select_sub_queries", |b| {
        b.iter(|| SelectParser.parse_sql(black_box(SUB_QUERY_SELECT)).unwrap());
    });
}

fn bench_create(c: &mut Criterion) {
    c.bench_function("parse_create", |b| {
        b.iter(|| CreateParser.parse_sql(black_box(CREATE)).unwrap());
    });
}

fn bench_insert(c: &mut Criterion) {
    let sql = insert_sql(1000);
    c.bench_function("parse_insert_1000_rows", |b| {
        b.iter(|| {
            let statement = InsertParser.parse_sql(black_box(&sql)).unwrap();
            assert_eq!(statement.values().len(), 1000);
        });
    });
}

fn bench_alter(c: &mut Criterion) {
    c.bench_function("parse_alter", |b| {
        b.iter(|| AlterParser.parse_sql(black_box(ALTER)).unwrap());
    });
}

fn bench_registry(c: &mut Criterion) {
    let registry = ParserRegistry::global();
    c.bench_function("registry_parse_statement", |b| {
        b.iter(|| registry.parse_statement(black_box(SELECT)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_select,
    bench_create,
    bench_insert,
    bench_alter,
    bench_registry
);
criterion_main!(benches);
