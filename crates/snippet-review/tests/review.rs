//! End-to-end tests through the `detect`/`analyze` boundary.

use snippet_review::{analyze, detect, AnalysisResult, Dialect, Severity, MAX_SUMMARY_LEN};

fn kinds(result: &AnalysisResult) -> Vec<&str> {
    result.issues.iter().map(|i| i.kind.as_str()).collect()
}

fn errors(result: &AnalysisResult) -> Vec<&snippet_review::Issue> {
    result
        .issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .collect()
}

#[test]
fn analysis_is_total() {
    let inputs = [
        "",
        "   \n\t",
        "{{{{",
        "}}}} {",
        "End Sub\nEnd Sub\nEnd Function",
        "END END BEGIN\nGO\nGO",
        "\"unterminated",
        "'",
        "\r\n\r",
        "éé\u{1F600} ( , ,",
        "void (",
        "CREATE PROC",
        "CREATE PROCEDURE x (@a int,",
        "Function",
        "class",
    ];
    for input in inputs {
        for dialect in Dialect::ALL {
            let result = analyze(input, dialect);
            assert!(result.summary.ends_with('.'), "{input:?} as {dialect}");
            assert!(result.summary.chars().count() <= MAX_SUMMARY_LEN);
        }
    }
}

#[test]
fn analysis_is_deterministic() {
    let code = "public void Go(int a) {\n  if (a) { if (a) { if (a) { } } }\n  Log(\"x\"); Log(\"x\");\n}";
    for dialect in Dialect::ALL {
        assert_eq!(analyze(code, dialect), analyze(code, dialect));
    }
    assert_eq!(detect(code), detect(code));
}

#[test]
fn blank_input_yields_default_summary() {
    let result = analyze("  \n ", Dialect::CSharp);
    assert!(result.issues.is_empty());
    assert_eq!(result.summary, "Analyzes generic code snippet.");
}

#[test]
fn first_detection_tier_wins() {
    assert_eq!(detect("namespace Shop;\nSELECT * FROM Orders"), Dialect::CSharp);
    assert_eq!(detect("SELECT * FROM Orders"), Dialect::Sql);
    assert_eq!(detect(""), Dialect::Unknown);
}

#[test]
fn long_line_is_reported_once() {
    let code = format!("int total = 0;\n// {}", "a".repeat(118));
    let result = analyze(&code, Dialect::CSharp);
    let long = result.of_kind("CSharp.LongLine");
    assert_eq!(long.len(), 1);
    assert_eq!(long[0].line_number, Some(2));
    assert_eq!(long[0].severity, Severity::Warning);
}

#[test]
fn unmatched_sub_is_a_snippet_scoped_error() {
    let result = analyze("Sub Run()\n  Console.WriteLine(1)", Dialect::VbNet);
    let errs = errors(&result);
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].kind, "VBNet.MissingEndSub");
    assert_eq!(errs[0].line_number, None);
}

#[test]
fn delete_without_where_is_an_error() {
    let result = analyze("DELETE FROM Orders", Dialect::Sql);
    let errs = errors(&result);
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].line_number, Some(1));

    let result = analyze("DELETE FROM Orders WHERE Id=1", Dialect::Sql);
    assert!(errors(&result).is_empty());
}

#[test]
fn repeated_string_literal_is_reported_once() {
    let code = "Log(\"x\");\nLog(\"x\");\nLog(\"x\");";
    for dialect in [Dialect::CSharp, Dialect::VbNet, Dialect::Unknown] {
        let result = analyze(code, dialect);
        let repeated = result.of_kind("Smell.RepeatedLiteral");
        assert_eq!(repeated.len(), 1);
        assert_eq!(repeated[0].message, "Literal 'x' appears 3 times.");
        assert_eq!(repeated[0].line_number, Some(1));
    }
}

#[test]
fn tmp_is_generic_in_every_dialect() {
    let samples = [
        ("var tmp = 1;", Dialect::CSharp),
        ("Dim Tmp As Integer", Dialect::VbNet),
        ("SELECT t.Id FROM Orders AS TMP", Dialect::Sql),
    ];
    for (code, dialect) in samples {
        let result = analyze(code, dialect);
        assert!(
            result
                .of_kind("Naming.NonDescriptive")
                .iter()
                .any(|i| i.message.ends_with("is generic and non-descriptive.")),
            "{dialect}"
        );
    }
}

#[test]
fn long_summary_is_truncated_with_one_period() {
    let code = format!("SELECT Id FROM {}", "t".repeat(200));
    let result = analyze(&code, Dialect::Sql);
    assert!(result.summary.chars().count() <= MAX_SUMMARY_LEN);
    assert!(result.summary.ends_with('.'));
    assert!(!result.summary.ends_with(".."));
}

#[test]
fn issues_follow_family_order() {
    let code = r#"public void Do(int a, int b, int c, int d, int e, int f)
{
    // TODO tidy
    var tmp = "x";
    Log("x");
    Log("x");
}"#;
    assert_eq!(detect(code), Dialect::CSharp);
    let result = analyze(code, Dialect::CSharp);
    assert_eq!(
        kinds(&result),
        [
            "CSharp.TODO",
            "Naming.NonDescriptive",
            "Naming.NonDescriptive",
            "Naming.NonDescriptive",
            "Naming.NonDescriptive",
            "Naming.NonDescriptive",
            "Naming.NonDescriptive",
            "Naming.NonDescriptive",
            "Smell.LongParameterList",
            "Smell.RepeatedLiteral",
        ]
    );
    assert_eq!(result.summary, "Processes application logic.");
}

#[test]
fn vbnet_snippet_end_to_end() {
    let code = r"Imports System
Module Program
    Sub Main()
        Dim i As Integer
        For i = 1 To 3
            GoTo Done
        Next
Done:
    End Sub
End Module";
    assert_eq!(detect(code), Dialect::VbNet);
    let result = analyze(code, Dialect::VbNet);
    assert_eq!(kinds(&result), ["VBNet.GoTo"]);
    assert_eq!(result.issues[0].line_number, Some(6));
    assert_eq!(result.summary, "Processes application logic.");
}

#[test]
fn sql_procedure_end_to_end() {
    let code = r"CREATE PROCEDURE dbo.ArchiveOrders @CutOff date, @BatchSize int, @DryRun bit, @Region nvarchar(10), @Owner int, @Reason nvarchar(50) AS
BEGIN
    UPDATE Orders SET Archived = 1 WHERE Created < @CutOff
    SELECT COUNT(*) FROM Orders o WITH (NOLOCK)
END";
    assert_eq!(detect(code), Dialect::Sql);
    let result = analyze(code, Dialect::Sql);
    assert_eq!(
        kinds(&result),
        ["SQL.NoLock", "Naming.NonDescriptive", "Smell.LongParameterList"]
    );
    assert_eq!(
        result.issues[1].suggestion,
        "Use a meaningful verb/noun, e.g., 'CalculateLoanInterest' or 'ProcessData'. For SQL, consider 'UpdateRecord'."
    );
    assert_eq!(
        result.issues[2].message,
        "Procedure 'ArchiveOrders' has 6 parameters."
    );
    assert_eq!(result.summary, "Retrieves data from Orders.");
}

#[test]
fn wire_shape_is_stable() {
    let result = analyze("DELETE FROM Orders", Dialect::Sql);
    insta::assert_json_snapshot!(result, @r###"
    {
      "summary": "Deletes records from Orders.",
      "issues": [
        {
          "type": "SQL.MissingWhere",
          "lineNumber": 1,
          "message": "DELETE/UPDATE without WHERE clause.",
          "suggestion": "Add a WHERE clause to avoid affecting unintended rows.",
          "severity": "Error"
        }
      ]
    }
    "###);
}

#[test]
fn snippet_scoped_issue_serializes_null_line() {
    let result = analyze("Function Total() As Integer", Dialect::VbNet);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["issues"][0]["type"], "VBNet.MissingEndFunction");
    assert!(json["issues"][0]["lineNumber"].is_null());
}

#[test]
fn camel_case_loan_parameters_drive_summary() {
    let code = "public decimal CalculateInterest(decimal loanPrincipal, decimal annualRate, int termMonths)\n{\n    return 0;\n}";
    let result = analyze(code, Dialect::CSharp);
    assert_eq!(result.summary, "Calculates loan interest.");
}

#[test]
fn commented_vbnet_blocks_still_nest() {
    let code = r"Sub Run()
  If a Then ' first
    If b Then ' second
      If c Then ' third
        x = 1
      End If
    End If
  End If
End Sub";
    let result = analyze(code, Dialect::VbNet);
    assert_eq!(result.of_kind("Smell.DeepNesting").len(), 1);
}
