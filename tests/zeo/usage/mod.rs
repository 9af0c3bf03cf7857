mod rejects_bad_invocation_contract;
