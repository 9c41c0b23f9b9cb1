mod cli_parsing;
