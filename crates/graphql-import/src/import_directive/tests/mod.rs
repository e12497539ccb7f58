mod import_line_parser_tests;
